use super::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Language of the generated documentation and HTTP messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    BrazilianPortuguese,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::English => &ENGLISH,
            Self::BrazilianPortuguese => &PORTUGUESE,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::BrazilianPortuguese => "pt-BR",
        }
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Self::English),
            "pt" | "pt-br" | "portuguese" => Ok(Self::BrazilianPortuguese),
            other => Err(ValidationError::InvalidLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Fixed strings used by the documentation templates and HTTP envelopes.
#[derive(Debug, Serialize)]
pub struct Labels {
    pub design_system: &'static str,
    pub overview: &'static str,
    pub overview_body: &'static str,
    pub styles: &'static str,
    pub components: &'static str,
    pub total_styles: &'static str,
    pub total_components: &'static str,
    pub last_modified: &'static str,
    pub style_type: &'static str,
    pub node_id: &'static str,
    pub remote: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub no_description: &'static str,
    pub generated: &'static str,
    pub generation_failed: &'static str,
    pub tokens_stub: &'static str,
    pub tokens_failed: &'static str,
}

static ENGLISH: Labels = Labels {
    design_system: "Design System",
    overview: "Overview",
    overview_body: "This document contains the design system documentation.",
    styles: "Styles",
    components: "Components",
    total_styles: "Total styles",
    total_components: "Total components",
    last_modified: "Last modified",
    style_type: "Type",
    node_id: "Node ID",
    remote: "Remote",
    yes: "Yes",
    no: "No",
    no_description: "No description provided.",
    generated: "Design system documentation generated successfully",
    generation_failed: "Failed to generate design system documentation",
    tokens_stub: "Design token generation endpoint",
    tokens_failed: "Failed to generate design tokens",
};

static PORTUGUESE: Labels = Labels {
    design_system: "Design System",
    overview: "Visão Geral",
    overview_body: "Este documento contém a documentação do design system.",
    styles: "Estilos",
    components: "Componentes",
    total_styles: "Total de estilos",
    total_components: "Total de componentes",
    last_modified: "Última modificação",
    style_type: "Tipo",
    node_id: "ID do Nó",
    remote: "Remoto",
    yes: "Sim",
    no: "Não",
    no_description: "Sem descrição fornecida.",
    generated: "Documentação do design system gerada com sucesso",
    generation_failed: "Falha ao gerar documentação do design system",
    tokens_stub: "Endpoint de geração de tokens de design",
    tokens_failed: "Falha ao gerar tokens de design",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::BrazilianPortuguese);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_yes_no_tokens() {
        assert_eq!(Locale::English.labels().yes, "Yes");
        assert_eq!(Locale::BrazilianPortuguese.labels().no, "Não");
    }
}
