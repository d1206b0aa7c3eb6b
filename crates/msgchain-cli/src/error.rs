//! Application-wide error types using thiserror.

use msgchain_common::MsgchainError;
use msgchain_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] MsgchainError),

    /// Catalog loading error.
    #[error("Catalog error: {0}")]
    Catalog(#[from] I18nError),

    /// A `--catalog` argument not of the form `LOCALE=PATH`.
    #[error("Invalid catalog argument '{0}': expected LOCALE=PATH")]
    InvalidCatalogArg(String),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
