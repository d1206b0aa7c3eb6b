//! Command line arguments

use crate::error::{CliError, CliResult};
use clap::Parser;
use msgchain_common::MessageId;
use std::path::PathBuf;

/// Default configuration file, read when present
pub const DEFAULT_CONFIG_FILE: &str = "msgchain.toml";

/// One layer of the catalog chain given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogArg {
    /// Locale tag, `de_DE` or `de-DE`
    pub locale: String,
    /// Fluent file holding the layer's messages
    pub path: PathBuf,
}

/// Parse a `LOCALE=PATH` argument
pub fn parse_catalog_arg(value: &str) -> CliResult<CatalogArg> {
    let (locale, path) = value
        .split_once('=')
        .ok_or_else(|| CliError::InvalidCatalogArg(value.to_string()))?;

    let locale = locale.trim();
    if locale.is_empty() || path.is_empty() {
        return Err(CliError::InvalidCatalogArg(value.to_string()));
    }

    Ok(CatalogArg {
        locale: locale.to_string(),
        path: PathBuf::from(path),
    })
}

/// Look up a message in a chain of catalogs
#[derive(Parser, Debug)]
#[command(name = "msgchain", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "MSGCHAIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Catalog layer as LOCALE=FILE.ftl, most specific first
    #[arg(long = "catalog", value_name = "LOCALE=PATH", value_parser = parse_catalog_arg, required = true)]
    pub catalogs: Vec<CatalogArg>,

    /// Message key
    pub key: String,

    /// Plural key, switches to a plural lookup
    #[arg(short, long)]
    pub plural: Option<String>,

    /// Count selecting the plural form
    #[arg(short = 'n', long, requires = "plural", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Message context
    #[arg(long)]
    pub context: Option<String>,
}

impl Args {
    /// Message identifier described by the arguments
    pub fn message_id(&self) -> MessageId {
        let mut id = MessageId::new(self.key.clone());
        if let Some(plural) = &self.plural {
            id = id.with_plural(plural.clone());
        }
        if let Some(context) = &self.context {
            id = id.with_context(context.clone());
        }
        id
    }

    /// Configuration file to read
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}
