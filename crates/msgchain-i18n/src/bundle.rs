//! Fluent-backed catalog
//!
//! Wraps a concurrent `FluentBundle` so Fluent resources can sit in a catalog
//! chain. Fluent has no notion of gettext plural-form sequences, so this
//! catalog only exposes the plain-lookup capability: plural lookups take
//! its value as-is regardless of the count.

use crate::catalog::{Catalog, PlainLookup, SharedCatalog};
use crate::error::{I18nError, I18nResult};
use crate::locale::parse_locale;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};
use unic_langid::LanguageIdentifier;

/// Catalog over a Fluent bundle
pub struct FluentCatalog {
    locale: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
    parent: Option<SharedCatalog>,
}

impl fmt::Debug for FluentCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentCatalog")
            .field("locale", &self.locale)
            .field("bundle", &"FluentBundle<FluentResource>")
            .field("parent", &self.parent)
            .finish()
    }
}

impl FluentCatalog {
    /// Create an empty catalog for `locale`
    pub fn new(locale: &str) -> I18nResult<Self> {
        let locale = parse_locale(locale)?;
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Plain output, no Unicode isolation marks around placeables
        bundle.set_use_isolating(false);

        Ok(Self {
            locale,
            bundle,
            parent: None,
        })
    }

    /// Create a catalog for `locale` from Fluent source text
    pub fn from_source(locale: &str, source: impl Into<String>) -> I18nResult<Self> {
        let mut catalog = Self::new(locale)?;
        catalog.add_source(source)?;
        Ok(catalog)
    }

    /// Parse Fluent source text and add its messages
    pub fn add_source(&mut self, source: impl Into<String>) -> I18nResult<()> {
        let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
            let error_messages: Vec<String> =
                errors.into_iter().map(|e| format!("{e:?}")).collect();

            error!("Failed to parse Fluent resource: {:?}", error_messages);

            I18nError::FluentParseError {
                errors: error_messages,
            }
        })?;
        self.add_resource(resource)
    }

    /// Add an already parsed resource
    pub fn add_resource(&mut self, resource: FluentResource) -> I18nResult<()> {
        self.bundle.add_resource(resource).map_err(|errors| {
            let error_messages: Vec<String> =
                errors.into_iter().map(|e| format!("{e:?}")).collect();

            error!("Failed to add resource to bundle: {:?}", error_messages);

            I18nError::BundleCreationError {
                locale: self.locale.to_string(),
                source: Box::new(I18nError::FluentParseError {
                    errors: error_messages,
                }),
            }
        })?;

        debug!("Added resource to catalog for locale: {}", self.locale);
        Ok(())
    }

    /// Set the parent catalog
    #[must_use]
    pub fn with_parent(mut self, parent: SharedCatalog) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Check if a message with a value exists
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle
            .get_message(id)
            .is_some_and(|message| message.value().is_some())
    }

    /// Wrap in an `Arc` for use as a parent
    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(self)
    }
}

impl PlainLookup for FluentCatalog {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        let pattern = self.bundle.get_message(key)?.value()?;

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, None, &mut errors);

        if !errors.is_empty() {
            warn!(
                "Formatting errors for message '{}' in {}: {:?}",
                key, self.locale, errors
            );
        }

        Some(formatted)
    }
}

impl Catalog for FluentCatalog {
    fn as_plain(&self) -> Option<&dyn PlainLookup> {
        Some(self)
    }

    fn parent(&self) -> Option<&dyn Catalog> {
        self.parent.as_deref().map(|p| p as &dyn Catalog)
    }

    fn locale(&self) -> Option<&LanguageIdentifier> {
        Some(&self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_formats_plain_messages() {
        let catalog = FluentCatalog::from_source("de", "file = Datei\nsave = Speichern\n").unwrap();

        assert!(catalog.has_message("file"));
        assert_eq!(catalog.lookup("file").as_deref(), Some("Datei"));
        assert_eq!(catalog.lookup("open"), None);
    }

    #[test]
    fn test_missing_variable_still_yields_text() {
        let catalog = FluentCatalog::from_source("en", "greeting = Welcome, {$name}!\n").unwrap();

        let text = catalog.lookup("greeting").unwrap();
        assert!(text.starts_with("Welcome, "));
    }

    #[test]
    fn test_message_without_value_is_absent() {
        let catalog = FluentCatalog::from_source("en", "menu =\n    .title = Menu\n").unwrap();

        assert!(!catalog.has_message("menu"));
        assert_eq!(catalog.lookup("menu"), None);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = FluentCatalog::from_source("en", "this is not fluent");
        assert!(matches!(result, Err(I18nError::FluentParseError { .. })));
    }

    #[test]
    fn test_duplicate_message_is_reported() {
        let mut catalog = FluentCatalog::from_source("en", "hello = Hello\n").unwrap();
        let result = catalog.add_source("hello = Hi\n");
        assert!(matches!(result, Err(I18nError::BundleCreationError { .. })));
    }

    #[test]
    fn test_invalid_locale() {
        assert!(matches!(
            FluentCatalog::new("!!"),
            Err(I18nError::InvalidLanguageId(_))
        ));
    }
}
