//! Loading Fluent files into a catalog chain

use crate::bundle::FluentCatalog;
use crate::catalog::SharedCatalog;
use crate::error::{I18nError, I18nResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read a Fluent file into a catalog for `locale`
pub fn load_fluent_catalog(locale: &str, path: &Path) -> I18nResult<FluentCatalog> {
    debug!("Loading resource file: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| I18nError::ResourceLoadError {
        path: path.to_string_lossy().to_string(),
        source,
    })?;

    let catalog = FluentCatalog::from_source(locale, content)?;
    info!("Loaded catalog for locale {} from {:?}", locale, path);
    Ok(catalog)
}

/// Builds a chain of Fluent catalogs from files
///
/// Layers are added most specific first; each layer becomes the parent of
/// the one added before it.
#[derive(Debug, Default, Clone)]
pub struct ChainBuilder {
    layers: Vec<(String, PathBuf)>,
}

impl ChainBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next, less specific layer
    #[must_use]
    pub fn layer(mut self, locale: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.layers.push((locale.into(), path.into()));
        self
    }

    /// Number of layers added so far
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers were added
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Load every layer and link them, returning the most specific catalog
    pub fn build(self) -> I18nResult<SharedCatalog> {
        let mut parent: Option<SharedCatalog> = None;

        for (locale, path) in self.layers.iter().rev() {
            let catalog = load_fluent_catalog(locale, path)?;
            let catalog = match parent.take() {
                Some(parent) => catalog.with_parent(parent),
                None => catalog,
            };
            parent = Some(catalog.into_shared());
        }

        parent.ok_or(I18nError::EmptyChain)
    }
}
