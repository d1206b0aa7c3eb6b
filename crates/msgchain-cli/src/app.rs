//! Lookup driven by command line arguments

use crate::args::{Args, CatalogArg};
use crate::error::CliResult;
use msgchain_config::{ConfigLoader, LookupConfig};
use msgchain_i18n::{ChainBuilder, MessageLookup, SharedCatalog};
use tracing::{debug, info};

/// Build the catalog chain from `--catalog` layers
pub fn build_chain(layers: &[CatalogArg]) -> CliResult<SharedCatalog> {
    let builder = layers.iter().fold(ChainBuilder::new(), |builder, layer| {
        builder.layer(layer.locale.clone(), layer.path.clone())
    });

    debug!("Building catalog chain with {} layers", builder.len());
    Ok(builder.build()?)
}

/// Load the configuration named by the arguments
///
/// An explicit `--config` must exist; the default file is optional.
pub fn load_config(args: &Args) -> CliResult<LookupConfig> {
    let loader = ConfigLoader::new(args.config_path());
    let config = if args.config.is_some() {
        loader.load()?
    } else {
        loader.load_or_default()?
    };
    Ok(config)
}

/// Resolve the requested message, returning the text to print
pub fn run(args: &Args) -> CliResult<String> {
    let config = load_config(args)?;
    let catalog = build_chain(&args.catalogs)?;
    let lookup = MessageLookup::from_config(&config);

    let id = args.message_id();
    info!("Looking up {}", id);

    let text = lookup.resolve(catalog.as_ref(), &id, args.count);
    Ok(text.into_owned())
}
