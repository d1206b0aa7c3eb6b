//! Common type definitions shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a message to look up: an optional disambiguating context,
/// the singular key and, for plural lookups, the plural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId {
    /// Disambiguating context (`msgctxt` in gettext terms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Untranslated singular key.
    pub key: String,
    /// Untranslated plural key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}

impl MessageId {
    /// Creates a plain message id.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            context: None,
            key: key.into(),
            plural: None,
        }
    }

    /// Attaches a plural key.
    #[must_use]
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    /// Attaches a context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Whether this id carries a plural key.
    pub const fn is_plural(&self) -> bool {
        self.plural.is_some()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "{context}|")?;
        }
        write!(f, "{}", self.key)?;
        if let Some(plural) = &self.plural {
            write!(f, " / {plural}")?;
        }
        Ok(())
    }
}

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, MsgchainError>;

/// Workspace-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum MsgchainError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
