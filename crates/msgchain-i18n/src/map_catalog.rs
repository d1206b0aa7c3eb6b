//! In-memory catalog with plain and plural-aware lookup

use crate::catalog::{Catalog, Entry, PlainLookup, PluralLookup, SharedCatalog};
use crate::error::I18nResult;
use crate::locale::parse_locale;
use crate::plural::PluralRule;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stored {
    Single(String),
    Plural(Vec<String>),
}

/// A catalog held in memory, built programmatically.
///
/// Plural awareness is on whenever the catalog has a plural rule. Catalogs
/// created for a locale get that locale's rule; the root catalog has none
/// and answers through plain lookup only.
///
/// # Example
///
/// ```
/// use msgchain_i18n::{MapCatalog, MessageLookup};
///
/// let de = MapCatalog::new("de")
///     .unwrap()
///     .with_plural("file", ["Datei", "Dateien"])
///     .into_shared();
/// let de_de = MapCatalog::new("de_DE").unwrap().with_parent(de);
///
/// let lookup = MessageLookup::new();
/// assert_eq!(lookup.ngettext(&de_de, "file", "files", 5), "Dateien");
/// assert_eq!(lookup.gettext(&de_de, "Hello"), "Hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    locale: Option<LanguageIdentifier>,
    entries: HashMap<String, Stored>,
    plural_rule: Option<PluralRule>,
    parent: Option<SharedCatalog>,
}

impl MapCatalog {
    /// Create an empty catalog for `locale` using the locale's plural rule.
    pub fn new(locale: &str) -> I18nResult<Self> {
        let locale = parse_locale(locale)?;
        Ok(Self {
            plural_rule: Some(PluralRule::for_locale(&locale)),
            locale: Some(locale),
            ..Self::default()
        })
    }

    /// Create the locale-neutral root catalog.
    pub fn root() -> Self {
        Self::default()
    }

    /// Add a string with no plural variation.
    #[must_use]
    pub fn with_message(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add plural forms for a key.
    #[must_use]
    pub fn with_plural<I, S>(mut self, key: impl Into<String>, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_plural(key, forms);
        self
    }

    /// Set the parent catalog.
    #[must_use]
    pub fn with_parent(mut self, parent: SharedCatalog) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Override the plural rule; this also turns plural awareness on.
    #[must_use]
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural_rule = Some(rule);
        self
    }

    /// Turn plural awareness off; plural entries then answer with their
    /// first form through plain lookup.
    #[must_use]
    pub fn without_plural_rule(mut self) -> Self {
        self.plural_rule = None;
        self
    }

    /// Insert a string with no plural variation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), Stored::Single(value.into()));
    }

    /// Insert plural forms for a key.
    pub fn insert_plural<I, S>(&mut self, key: impl Into<String>, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let forms = forms.into_iter().map(Into::into).collect();
        self.entries.insert(key.into(), Stored::Plural(forms));
    }

    /// Plural rule in effect, if plural awareness is on.
    pub const fn plural_rule(&self) -> Option<&PluralRule> {
        self.plural_rule.as_ref()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Wrap in an `Arc` for use as a parent.
    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(self)
    }

    fn entry(&self, key: &str) -> Option<Entry<'_>> {
        self.entries.get(key).map(|stored| match stored {
            Stored::Single(value) => Entry::Single(Cow::Borrowed(value.as_str())),
            Stored::Plural(forms) => Entry::Plural(Cow::Borrowed(forms.as_slice())),
        })
    }
}

impl PlainLookup for MapCatalog {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.entry(key).and_then(Entry::singular)
    }
}

impl PluralLookup for MapCatalog {
    fn lookup_entry(&self, key: &str) -> Option<Entry<'_>> {
        self.entry(key)
    }

    fn plural_index(&self, n: i64) -> usize {
        self.plural_rule.unwrap_or_default().index(n)
    }
}

impl Catalog for MapCatalog {
    fn as_plain(&self) -> Option<&dyn PlainLookup> {
        Some(self)
    }

    fn as_plural(&self) -> Option<&dyn PluralLookup> {
        self.plural_rule.is_some().then_some(self as &dyn PluralLookup)
    }

    fn parent(&self) -> Option<&dyn Catalog> {
        self.parent.as_deref().map(|p| p as &dyn Catalog)
    }

    fn locale(&self) -> Option<&LanguageIdentifier> {
        self.locale.as_ref()
    }
}
