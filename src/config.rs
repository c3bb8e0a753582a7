//! Configuración leída del entorno (y de `.env`, si existe).

use std::env;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "pdflens=warn";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" | "siempre" => Some(Self::Always),
            "never" | "nunca" => Some(Self::Never),
            _ => None,
        }
    }

    /// Aplica el modo a `console`; en `Auto` se respeta la detección de terminal.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => {
                console::set_colors_enabled(true);
                console::set_colors_enabled_stderr(true);
            }
            Self::Never => {
                console::set_colors_enabled(false);
                console::set_colors_enabled_stderr(false);
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Directiva de `tracing_subscriber::EnvFilter`.
    pub log_filter: String,
    pub color: ColorMode,
    /// Muestra una línea con el resultado de cada extracción (incluidos los fallos).
    pub show_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: ColorMode::Auto,
            show_status: false,
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("Valor inválido para {key}: `{value}`")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup("PDFLENS_LOG").filter(|value| !value.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup("PDFLENS_COLOR") {
            config.color = ColorMode::parse(&raw).ok_or(ConfigError {
                key: "PDFLENS_COLOR",
                value: raw,
            })?;
        }

        if let Some(raw) = lookup("PDFLENS_SHOW_STATUS") {
            config.show_status = parse_flag(&raw).ok_or(ConfigError {
                key: "PDFLENS_SHOW_STATUS",
                value: raw,
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "si" | "sí" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), Ok(Config::default()));
    }

    #[test]
    fn reads_all_variables() -> Result<(), ConfigError> {
        let config = config_from(&[
            ("PDFLENS_LOG", "pdflens=debug"),
            ("PDFLENS_COLOR", "never"),
            ("PDFLENS_SHOW_STATUS", "sí"),
        ])?;
        assert_eq!(config.log_filter, "pdflens=debug");
        assert_eq!(config.color, ColorMode::Never);
        assert!(config.show_status);
        Ok(())
    }

    #[test]
    fn blank_log_filter_keeps_default() -> Result<(), ConfigError> {
        let config = config_from(&[("PDFLENS_LOG", "  ")])?;
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        Ok(())
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            config_from(&[("PDFLENS_COLOR", "arcoiris")]),
            Err(ConfigError {
                key: "PDFLENS_COLOR",
                value: "arcoiris".to_string(),
            })
        );
        assert!(config_from(&[("PDFLENS_SHOW_STATUS", "quizás")]).is_err());
    }
}
