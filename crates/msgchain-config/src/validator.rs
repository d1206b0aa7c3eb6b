//! Runtime validation of loaded configuration.

use crate::schema::LookupConfig;
use msgchain_common::{MsgchainError, Result};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &LookupConfig) -> Result<()> {
        config.validate()
    }
}

impl LookupConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.chain.max_depth == 0 {
            return Err(MsgchainError::Config(
                "chain.max_depth must be at least 1".to_string(),
            ));
        }

        if self.context.glue.is_empty() {
            return Err(MsgchainError::Config(
                "context.glue cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
