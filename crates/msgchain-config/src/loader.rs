//! Configuration loading from TOML, YAML or JSON files with environment
//! overrides.

use crate::schema::LookupConfig;
use crate::validator::ConfigValidator;
use msgchain_common::{MsgchainError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable toggling trace output.
pub const ENV_TRACE: &str = "MSGCHAIN_TRACE";
/// Environment variable overriding `chain.max_depth`.
pub const ENV_MAX_DEPTH: &str = "MSGCHAIN_MAX_DEPTH";

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (`.toml`).
    Toml,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parses configuration text in this format.
    pub fn parse(self, contents: &str) -> Result<LookupConfig> {
        let parsed = match self {
            Self::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(MsgchainError::Serialization)
    }
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, applies environment overrides and
    /// validates the result.
    pub fn load(&self) -> Result<LookupConfig> {
        let format = ConfigFormat::from_path(&self.path).ok_or_else(|| {
            MsgchainError::Config(format!(
                "unsupported configuration file extension: {}",
                self.path.display()
            ))
        })?;

        debug!("Loading configuration file: {:?}", self.path);
        let contents = fs::read_to_string(&self.path)?;

        let mut config = format.parse(&contents)?;
        apply_env_overrides(&mut config, |name| std::env::var(name).ok());
        ConfigValidator::validate(&config)?;

        info!("Loaded configuration from {:?}", self.path);
        Ok(config)
    }

    /// Loads configuration from file if it exists, otherwise returns the
    /// defaults with environment overrides applied.
    pub fn load_or_default(&self) -> Result<LookupConfig> {
        if self.path.exists() {
            return self.load();
        }

        debug!("Configuration file {:?} not found, using defaults", self.path);
        let mut config = LookupConfig::default();
        apply_env_overrides(&mut config, |name| std::env::var(name).ok());
        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

/// Applies `MSGCHAIN_*` overrides read through `lookup_env`.
///
/// Unparseable values are ignored with a warning.
pub fn apply_env_overrides<F>(config: &mut LookupConfig, lookup_env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup_env(ENV_TRACE) {
        match parse_flag(&value) {
            Some(enabled) => config.trace.enabled = enabled,
            None => warn!("Ignoring {}={:?}: not a boolean", ENV_TRACE, value),
        }
    }

    if let Some(value) = lookup_env(ENV_MAX_DEPTH) {
        match value.trim().parse::<usize>() {
            Ok(depth) => config.chain.max_depth = depth,
            Err(_) => warn!("Ignoring {}={:?}: not a number", ENV_MAX_DEPTH, value),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
