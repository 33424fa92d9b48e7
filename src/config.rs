// src/config.rs
use crate::constants::{
    ACCESS_TOKEN_ENV, DEFAULT_OUTPUT_DIR, DEFAULT_PORT, FIGMA_API_BASE_URL, PORT_ENV,
};
use crate::error::AppError;
use crate::types::{AccessToken, Locale, ValidatedUrl, ValidationError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Port for the HTTP server (overrides the PORT environment variable)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Directory the documentation is written to
    #[arg(short = 'o', long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Language of the generated documentation ('en' or 'pt-BR')
    #[arg(long, global = true, default_value = "en")]
    pub locale: String,

    /// Include error details in HTTP failure envelopes
    #[arg(long, global = true, default_value_t = false)]
    pub development: bool,

    /// Base URL of the Figma REST API
    #[arg(long, global = true, default_value = FIGMA_API_BASE_URL)]
    pub api_base_url: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// What the binary should do once configured.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Generate the documentation for one file and exit
    Generate {
        /// Figma file key
        file_key: String,
    },
}

/// Resolved service configuration, built once by the entry point and
/// passed to every constructor that needs it.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub access_token: Option<AccessToken>,
    pub api_base_url: ValidatedUrl,
    pub port: u16,
    pub output_dir: PathBuf,
    pub locale: Locale,
    pub development: bool,
}

impl ServiceConfig {
    /// Resolves a complete configuration from CLI input and the process environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with_env(cli, |name| std::env::var(name).ok())
    }

    /// Resolves a configuration with an injectable environment lookup.
    ///
    /// Fails when the access token is absent: the service refuses to start
    /// without a credential.
    pub fn resolve_with_env<F>(cli: &CommandLineInput, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = env(ACCESS_TOKEN_ENV).ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                ACCESS_TOKEN_ENV
            ))
        })?;
        let access_token = AccessToken::new(token)?;

        let port = match cli.port {
            Some(port) => port,
            None => match env(PORT_ENV) {
                Some(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ValidationError::InvalidPort(raw.clone()))?,
                None => DEFAULT_PORT,
            },
        };

        let output_dir = PathBuf::from(&cli.output_dir);
        let output_dir = if output_dir.is_absolute() {
            output_dir
        } else {
            std::env::current_dir()?.join(output_dir)
        };

        Ok(ServiceConfig {
            access_token: Some(access_token),
            api_base_url: ValidatedUrl::parse(&cli.api_base_url)?,
            port,
            output_dir,
            locale: cli.locale.parse()?,
            development: cli.development,
        })
    }

    /// The command to run, defaulting to the HTTP server.
    pub fn command_of(cli: &CommandLineInput) -> Command {
        cli.command.clone().unwrap_or(Command::Serve)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_base_url: ValidatedUrl::parse(FIGMA_API_BASE_URL)
                .expect("Default API base URL should be valid"),
            port: DEFAULT_PORT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            locale: Locale::default(),
            development: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cli(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["figma2docs"];
        argv.extend_from_slice(args);
        CommandLineInput::parse_from(argv)
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_token_refuses_to_start() {
        let err = ServiceConfig::resolve_with_env(&cli(&[]), env_of(&[])).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[test]
    fn test_defaults() {
        let config =
            ServiceConfig::resolve_with_env(&cli(&[]), env_of(&[(ACCESS_TOKEN_ENV, "figd_x")]))
                .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.output_dir.is_absolute());
        assert!(config.output_dir.ends_with(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.locale, Locale::English);
        assert!(!config.development);
        assert_eq!(ServiceConfig::command_of(&cli(&[])), Command::Serve);
    }

    #[test]
    fn test_port_from_env_and_flag() {
        let env = env_of(&[(ACCESS_TOKEN_ENV, "figd_x"), (PORT_ENV, "8080")]);
        let config = ServiceConfig::resolve_with_env(&cli(&[]), &env).unwrap();
        assert_eq!(config.port, 8080);

        let config = ServiceConfig::resolve_with_env(&cli(&["--port", "9000"]), &env).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let env = env_of(&[(ACCESS_TOKEN_ENV, "figd_x"), (PORT_ENV, "eighty")]);
        let err = ServiceConfig::resolve_with_env(&cli(&[]), env).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_generate_subcommand() {
        let input = cli(&["generate", "abc123", "--locale", "pt-BR"]);
        assert_eq!(
            ServiceConfig::command_of(&input),
            Command::Generate {
                file_key: "abc123".to_string()
            }
        );
        let config =
            ServiceConfig::resolve_with_env(&input, env_of(&[(ACCESS_TOKEN_ENV, "figd_x")]))
                .unwrap();
        assert_eq!(config.locale, Locale::BrazilianPortuguese);
    }
}
