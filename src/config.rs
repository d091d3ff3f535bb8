// src/config.rs

use crate::error::{QuizError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fichero opcional en el directorio de trabajo que sobrescribe los valores por defecto
pub const CONFIG_FILE: &str = "quiz_bowl.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub database_file: PathBuf,
    pub admin_passphrase: String,
    pub pass_threshold: f64,
    pub window_title: String,
    pub initial_topics: Vec<String>,
}

// Todas las claves opcionales: lo que falte sale del YAML embebido
#[derive(Debug, Default, Deserialize)]
struct ConfigOverride {
    database_file: Option<PathBuf>,
    admin_passphrase: Option<String>,
    pass_threshold: Option<f64>,
    window_title: Option<String>,
    initial_topics: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let file_content = include_str!("data/config.yaml");
        serde_yaml::from_str(file_content).expect("No se pudo parsear la configuración embebida")
    }
}

impl AppConfig {
    /// Carga `quiz_bowl.yaml` si existe; si no, la configuración embebida.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| QuizError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml(&text)?;
        info!("Configuración cargada desde {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let over: ConfigOverride = if text.trim().is_empty() {
            ConfigOverride::default()
        } else {
            serde_yaml::from_str(text).map_err(|e| QuizError::Config(e.to_string()))?
        };

        let mut config = Self::default();
        if let Some(v) = over.database_file {
            config.database_file = v;
        }
        if let Some(v) = over.admin_passphrase {
            config.admin_passphrase = v;
        }
        if let Some(v) = over.pass_threshold {
            config.pass_threshold = v;
        }
        if let Some(v) = over.window_title {
            config.window_title = v;
        }
        if let Some(v) = over.initial_topics {
            config.initial_topics = v;
        }
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.pass_threshold) {
            return Err(QuizError::Config(format!(
                "pass_threshold must be between 0 and 100 (got {})",
                self.pass_threshold
            )));
        }
        if self.admin_passphrase.is_empty() {
            warn!("admin_passphrase vacía: cualquiera podrá entrar al panel");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_reference_behaviour() {
        let config = AppConfig::default();
        assert_eq!(config.database_file, PathBuf::from("quiz_bowl_app.db"));
        assert_eq!(config.pass_threshold, 80.0);
        assert_eq!(config.admin_passphrase, "momothecat");
        assert_eq!(config.initial_topics.len(), 6);
        assert!(config.initial_topics.iter().any(|t| t == "Theater"));
    }

    #[test]
    fn override_keeps_missing_keys_from_defaults() {
        let config = AppConfig::from_yaml("pass_threshold: 60.0\n").unwrap();
        assert_eq!(config.pass_threshold, 60.0);
        assert_eq!(config.window_title, "Quiz Bowl Application");
    }

    #[test]
    fn empty_override_is_the_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let err = AppConfig::from_yaml("pass_threshold: 120\n").unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from(Path::new("definitely/not/here.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
