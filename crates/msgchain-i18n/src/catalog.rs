//! Catalog capability contract and parent-chain traversal
//!
//! A catalog is a set of translations for one locale. Catalogs advertise
//! what they can do through capability probes instead of a fixed interface:
//!
//! - [`PlainLookup`]: key to string, no plural awareness
//! - [`PluralLookup`]: key to [`Entry`], plus the catalog's plural rule
//! - a parent link for fallback to a less specific locale
//!
//! A catalog may implement any subset. Catalogs that implement none still
//! take part in chains as links, and may answer the generic lookup through
//! [`Catalog::native_lookup`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

pub use msgchain_config::DEFAULT_MAX_DEPTH;

/// Owning handle used for parent links.
pub type SharedCatalog = Arc<dyn Catalog + Send + Sync>;

/// Value stored for a key in a plural-aware catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<'a> {
    /// A string with no plural variation.
    Single(Cow<'a, str>),
    /// Plural forms, indexed by the catalog's plural rule.
    Plural(Cow<'a, [String]>),
}

impl<'a> Entry<'a> {
    /// Select the form at `index`, clamping out-of-range indices to 0.
    ///
    /// Returns `None` only for an empty plural sequence.
    pub fn select(self, index: usize) -> Option<Cow<'a, str>> {
        match self {
            Self::Single(value) => Some(value),
            Self::Plural(forms) => {
                let index = if index < forms.len() { index } else { 0 };
                match forms {
                    Cow::Borrowed(forms) => forms.get(index).map(|s| Cow::Borrowed(s.as_str())),
                    Cow::Owned(mut forms) => {
                        if forms.is_empty() {
                            None
                        } else {
                            Some(Cow::Owned(forms.swap_remove(index)))
                        }
                    }
                }
            }
        }
    }

    /// The singular reading of this entry: the string itself, or the first
    /// plural form.
    pub fn singular(self) -> Option<Cow<'a, str>> {
        self.select(0)
    }
}

/// Plain key lookup without plural awareness.
pub trait PlainLookup {
    /// Look up `key` in this catalog only, without consulting parents.
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// Plural-aware key lookup.
pub trait PluralLookup {
    /// Look up `key` in this catalog only, without consulting parents.
    fn lookup_entry(&self, key: &str) -> Option<Entry<'_>>;

    /// Map a count to a plural-form index using this catalog's rule.
    fn plural_index(&self, n: i64) -> usize;
}

/// A message catalog for one locale.
///
/// Every method has a default, so a type only overrides the capabilities it
/// actually has.
pub trait Catalog: fmt::Debug {
    /// Plain lookup capability, if any.
    fn as_plain(&self) -> Option<&dyn PlainLookup> {
        None
    }

    /// Plural-aware lookup capability, if any.
    fn as_plural(&self) -> Option<&dyn PluralLookup> {
        None
    }

    /// Next less specific catalog.
    ///
    /// Returning `None` or `self` ends the chain.
    fn parent(&self) -> Option<&dyn Catalog> {
        None
    }

    /// Locale of this catalog; `None` for the locale-neutral root.
    fn locale(&self) -> Option<&LanguageIdentifier> {
        None
    }

    /// Provider-native lookup for catalogs that expose no capability.
    ///
    /// Only the generic lookup consults this.
    fn native_lookup(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

/// Iterator over a catalog and its ancestors, most specific first.
///
/// Stops when a catalog has no parent, when a catalog names itself as
/// parent, or after `max_depth` catalogs.
#[derive(Debug)]
pub struct CatalogChain<'a> {
    next: Option<&'a dyn Catalog>,
    remaining: usize,
    truncated: bool,
}

impl<'a> CatalogChain<'a> {
    /// Walk the chain starting at `start`, visiting at most `max_depth`
    /// catalogs.
    pub fn new(start: &'a dyn Catalog, max_depth: usize) -> Self {
        Self {
            next: Some(start),
            remaining: max_depth,
            truncated: false,
        }
    }

    /// Whether the walk was cut short by the depth bound while more
    /// ancestors remained.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<'a> Iterator for CatalogChain<'a> {
    type Item = &'a dyn Catalog;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.remaining == 0 {
            self.truncated = true;
            return None;
        }
        self.remaining -= 1;

        self.next = current
            .parent()
            .filter(|parent| !std::ptr::addr_eq(*parent, current));
        Some(current)
    }
}

/// Iterate `catalog` and its ancestors with the default depth bound.
pub fn chain(catalog: &dyn Catalog) -> CatalogChain<'_> {
    CatalogChain::new(catalog, DEFAULT_MAX_DEPTH)
}

/// Look up `key` at a single level, through whichever capability the
/// catalog has: plain first, then plural-aware (singular reading), then the
/// provider-native lookup.
pub fn lookup_local<'a>(catalog: &'a dyn Catalog, key: &str) -> Option<Cow<'a, str>> {
    if let Some(plain) = catalog.as_plain() {
        if let Some(value) = plain.lookup(key) {
            return Some(value);
        }
    }
    if let Some(plural) = catalog.as_plural() {
        if let Some(value) = plural.lookup_entry(key).and_then(Entry::singular) {
            return Some(value);
        }
    }
    catalog.native_lookup(key)
}

/// Generic lookup: the first value for `key` among the catalogs `walk`
/// still has to visit.
///
/// Unlike the plural walk, catalogs without capabilities do not stop the
/// search; they are skipped. The walk is left where the value was found, so
/// callers can inspect [`CatalogChain::is_truncated`] afterwards.
pub fn generic_lookup<'a>(walk: &mut CatalogChain<'a>, key: &str) -> Option<Cow<'a, str>> {
    walk.find_map(|level| lookup_local(level, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Link {
        name: &'static str,
        parent: Option<Box<Link>>,
    }

    impl Catalog for Link {
        fn parent(&self) -> Option<&dyn Catalog> {
            self.parent.as_deref().map(|p| p as &dyn Catalog)
        }

        fn native_lookup(&self, key: &str) -> Option<Cow<'_, str>> {
            (key == self.name).then(|| Cow::Borrowed(self.name))
        }
    }

    #[derive(Debug)]
    struct SelfParent;

    impl Catalog for SelfParent {
        fn parent(&self) -> Option<&dyn Catalog> {
            Some(self)
        }
    }

    fn three_links() -> Link {
        Link {
            name: "de_DE",
            parent: Some(Box::new(Link {
                name: "de",
                parent: Some(Box::new(Link {
                    name: "root",
                    parent: None,
                })),
            })),
        }
    }

    #[test]
    fn test_chain_visits_all_ancestors_in_order() {
        let start = three_links();
        let names: Vec<_> = chain(&start)
            .map(|c| lookup_local(c, "de").is_some())
            .collect();
        assert_eq!(names, vec![false, true, false]);
    }

    #[test]
    fn test_self_parent_terminates() {
        let start = SelfParent;
        assert_eq!(chain(&start).count(), 1);
    }

    #[test]
    fn test_depth_bound_truncates() {
        let start = three_links();
        let mut walk = CatalogChain::new(&start, 2);
        assert_eq!(walk.by_ref().count(), 2);
        assert!(walk.is_truncated());

        let mut walk = CatalogChain::new(&start, 3);
        assert_eq!(walk.by_ref().count(), 3);
        assert!(!walk.is_truncated());
    }

    #[test]
    fn test_generic_lookup_skips_capability_free_links() {
        let start = three_links();
        let found = generic_lookup(&mut CatalogChain::new(&start, 8), "root");
        assert_eq!(found.as_deref(), Some("root"));
        assert_eq!(generic_lookup(&mut CatalogChain::new(&start, 8), "fr"), None);

        let mut shallow = CatalogChain::new(&start, 2);
        assert_eq!(generic_lookup(&mut shallow, "root"), None);
        assert!(shallow.is_truncated());
    }

    #[test]
    fn test_entry_select_clamps() {
        let forms = vec!["Datei".to_string(), "Dateien".to_string()];

        let entry = Entry::Plural(Cow::Borrowed(forms.as_slice()));
        assert_eq!(entry.clone().select(1).as_deref(), Some("Dateien"));
        assert_eq!(entry.select(7).as_deref(), Some("Datei"));

        let owned = Entry::Plural(Cow::Owned(forms.clone()));
        assert_eq!(owned.select(1).as_deref(), Some("Dateien"));

        let single = Entry::Single(Cow::Borrowed("Ordner"));
        assert_eq!(single.select(5).as_deref(), Some("Ordner"));

        let empty = Entry::Plural(Cow::Owned(Vec::new()));
        assert_eq!(empty.select(0), None);
    }
}
