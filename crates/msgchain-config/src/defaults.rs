//! Default values for every configuration section.

use crate::schema::{ChainConfig, ContextConfig, LookupConfig, TraceConfig};
use msgchain_common::CONTEXT_GLUE;

/// Default maximum chain depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            trace: TraceConfig::default(),
            chain: ChainConfig::default(),
            context: ContextConfig::default(),
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            include_misses: false,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            glue: CONTEXT_GLUE.to_string(),
        }
    }
}
