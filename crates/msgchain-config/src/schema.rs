//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the lookup helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Diagnostic trace configuration.
    pub trace: TraceConfig,
    /// Catalog chain traversal configuration.
    pub chain: ChainConfig,
    /// Message context configuration.
    pub context: ContextConfig,
}

/// Diagnostic trace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Whether lookup events are forwarded to `tracing`.
    pub enabled: bool,
    /// Whether per-catalog misses are traced as well as hits and fallbacks.
    pub include_misses: bool,
}

/// Catalog chain traversal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Maximum number of catalogs visited in one chain walk.
    pub max_depth: usize,
}

/// Message context configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Separator between a message context and its key.
    pub glue: String,
}
