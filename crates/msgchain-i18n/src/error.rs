//! Error types for catalog construction
//!
//! Lookups themselves never fail; these errors only arise while building
//! catalogs.

use thiserror::Error;

/// Errors that can occur while constructing catalogs
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to load a resource file
    #[error("Failed to load resource file {path}: {source}")]
    ResourceLoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource: {errors:?}")]
    FluentParseError { errors: Vec<String> },

    /// Adding a resource to a bundle failed
    #[error("Failed to build catalog for locale {locale}: {source}")]
    BundleCreationError {
        locale: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A catalog chain was requested with no layers
    #[error("A catalog chain needs at least one catalog")]
    EmptyChain,
}

/// Result type for catalog construction
pub type I18nResult<T> = Result<T, I18nError>;
