//! Configuration management
//!
//! Loads configuration from config.toml with support for:
//! - DLP context identifier
//! - Input and output directories
//! - Validation service endpoint
//!
//! Per-deployment values can be overridden via environment variables
//! (DLP_ID, INPUT_DIR, OUTPUT_DIR, VALIDATION_ENDPOINT).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub proof: ProofConfig,
    pub validator: ValidatorConfig,
}

/// Proof generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofConfig {
    /// DLP context this proof is generated under
    pub dlp_id: String,
    /// Directory holding the contributed input files
    pub input_dir: PathBuf,
    /// Directory the results.json artifact is written to
    pub output_dir: PathBuf,
}

/// Validation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Full URL the finished proof is POSTed to
    pub endpoint: String,
}

impl Config {
    /// Load from config.toml or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load from specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            // Use embedded default config
            toml::from_str(DEFAULT_CONFIG).context("Failed to parse default config")
        }
    }

    /// Get DLP id (env var takes precedence over the config value)
    pub fn dlp_id(&self) -> String {
        env_override("DLP_ID").unwrap_or_else(|| self.proof.dlp_id.clone())
    }

    /// Get input directory (env var takes precedence)
    pub fn input_dir(&self) -> PathBuf {
        env_override("INPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.proof.input_dir.clone())
    }

    /// Get output directory (env var takes precedence)
    pub fn output_dir(&self) -> PathBuf {
        env_override("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.proof.output_dir.clone())
    }

    /// Get validation endpoint (env var takes precedence)
    pub fn validation_endpoint(&self) -> String {
        env_override("VALIDATION_ENDPOINT").unwrap_or_else(|| self.validator.endpoint.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        // The embedded default config is validated at compile time,
        // so this should never fail. Using a fallback for robustness.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            proof: ProofConfig {
                dlp_id: "24".to_string(),
                input_dir: PathBuf::from("/input"),
                output_dir: PathBuf::from("/output"),
            },
            validator: ValidatorConfig {
                endpoint: "https://validator.moksha.vana.org/api/poc/datavalidation".to_string(),
            },
        })
    }
}

/// Non-empty environment variable, if set
fn env_override(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => Some(val),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("embedded config is valid");
        assert_eq!(config.proof.dlp_id, "24");
        assert_eq!(config.proof.input_dir, PathBuf::from("/input"));
        assert!(!config.validator.endpoint.is_empty());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Config::load_from("/nonexistent/config.toml").expect("load default");
        assert_eq!(config.proof.dlp_id, Config::default().proof.dlp_id);
    }

    #[test]
    fn test_dlp_id_env_precedence() {
        std::env::remove_var("DLP_ID");
        let config = Config::default();
        assert_eq!(config.dlp_id(), "24");

        std::env::set_var("DLP_ID", "99");
        assert_eq!(config.dlp_id(), "99");

        // Empty env values are ignored
        std::env::set_var("DLP_ID", "");
        assert_eq!(config.dlp_id(), "24");

        std::env::remove_var("DLP_ID");
    }

    #[test]
    fn test_load_from_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[proof]
dlp_id = "7"
input_dir = "/data/in"
output_dir = "/data/out"

[validator]
endpoint = "https://validator.example.net/api/poc/datavalidation"
"#,
        )
        .expect("write config");

        let config = Config::load_from(&path).expect("load config");
        assert_eq!(config.proof.dlp_id, "7");
        assert_eq!(config.proof.input_dir, PathBuf::from("/data/in"));
        assert_eq!(
            config.validator.endpoint,
            "https://validator.example.net/api/poc/datavalidation"
        );
    }
}
