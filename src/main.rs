// src/main.rs

use anyhow::Context;
use clap::Parser;
use figma2docs::{
    ApiServer, AppState, Command, CommandLineInput, DesignSystemService, FigmaService,
    GenerationResult, ServiceConfig,
};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("figma2docs.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}"
    } else {
        "{d(%H:%M:%S)} [{l}] - {m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Serves the HTTP API until the process is stopped.
async fn serve(config: &ServiceConfig, figma: FigmaService) -> anyhow::Result<()> {
    let design_system = DesignSystemService::from_config(figma.clone(), config)?;
    let state = Arc::new(AppState {
        figma,
        design_system,
        development: config.development,
    });

    log::info!(
        "Writing documentation to {} ({})",
        config.output_dir.display(),
        config.locale
    );
    ApiServer::new(config, state)
        .run()
        .await
        .context("HTTP server stopped")?;
    Ok(())
}

/// Generates the documentation for one file and prints a summary.
async fn generate(config: &ServiceConfig, figma: FigmaService, file_key: &str) -> anyhow::Result<()> {
    let service = DesignSystemService::from_config(figma, config)?;
    let result = service
        .generate(file_key)
        .await
        .with_context(|| format!("Failed to generate documentation for {}", file_key))?;
    report_completion(config, &result);
    Ok(())
}

fn report_completion(config: &ServiceConfig, result: &GenerationResult) {
    println!("✓ {}", config.locale.labels().generated);
    println!(
        "  {} styles, {} components → {}",
        result.stats.styles,
        result.stats.components,
        result.output_dir.display()
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("Failed to initialize logging")?;

    let config = ServiceConfig::resolve(&cli).context("Invalid configuration")?;
    let figma = FigmaService::from_config(&config)?;

    match ServiceConfig::command_of(&cli) {
        Command::Serve => serve(&config, figma).await,
        Command::Generate { file_key } => generate(&config, figma, &file_key).await,
    }
}
