//! Test utilities and shared test helpers for msgchain.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `name` inside `dir`, returning the full path.
#[cfg(feature = "tempfile")]
pub fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Fluent sources for a `de_DE -> de -> en` catalog chain.
pub mod catalog_fixtures {
    /// Root (English) catalog source.
    pub fn en_ftl() -> &'static str {
        r"
hello = Hello!
file = file
greeting = Welcome, {$name}!
"
    }

    /// Generic German catalog source.
    pub fn de_ftl() -> &'static str {
        r"
hello = Hallo!
file = Datei
save = Speichern
"
    }

    /// Regional German catalog source.
    pub fn de_de_ftl() -> &'static str {
        r"
hello = Servus!
"
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Minimal valid configuration as TOML.
    pub fn minimal_config_toml() -> &'static str {
        r"
[trace]
enabled = false
"
    }

    /// Full configuration as TOML.
    pub fn full_config_toml() -> &'static str {
        r#"
[trace]
enabled = true
include_misses = true

[chain]
max_depth = 8

[context]
glue = "|"
"#
    }

    /// Full configuration as YAML.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "trace:\n",
            "  enabled: true\n",
            "  include_misses: false\n",
            "chain:\n",
            "  max_depth: 16\n",
        )
    }

    /// Configuration rejected by validation.
    pub fn invalid_config_toml() -> &'static str {
        r"
[chain]
max_depth = 0
"
    }
}
