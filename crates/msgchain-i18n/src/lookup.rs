//! gettext-style message lookup over catalog chains
//!
//! # Resolution order for plural lookups
//!
//! 1. Walk the chain from the given catalog towards the root. A
//!    plural-aware catalog answers with its single string, or with the form
//!    its plural rule selects (index 0 when the rule points past the
//!    available forms). A plain catalog answers with its string. A catalog
//!    with neither capability ends the walk.
//! 2. Generic lookup on the starting catalog.
//! 3. The untranslated plural key when `n != 1`, else the singular key.
//!
//! Missing translations are never errors.

use crate::catalog::{generic_lookup, Catalog, CatalogChain, Entry};
use crate::trace::{Capability, NoopTrace, TraceEvent, TraceSink, TracingTrace};
use msgchain_common::{glue_context, MessageId, CONTEXT_GLUE};
use msgchain_config::{LookupConfig, DEFAULT_MAX_DEPTH};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Shared trace sink handle
pub type SharedTrace = Arc<dyn TraceSink + Send + Sync>;

static DEFAULT_LOOKUP: Lazy<MessageLookup> = Lazy::new(MessageLookup::new);

/// Message lookup helper
///
/// Holds only settings; catalogs are passed per call and never mutated.
#[derive(Debug, Clone)]
pub struct MessageLookup {
    max_depth: usize,
    glue: String,
    trace: SharedTrace,
}

impl Default for MessageLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLookup {
    /// Helper with the default depth bound, the gettext context glue and no
    /// tracing
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            glue: CONTEXT_GLUE.to_string(),
            trace: Arc::new(NoopTrace),
        }
    }

    /// Helper configured from a [`LookupConfig`]
    pub fn from_config(config: &LookupConfig) -> Self {
        let trace: SharedTrace = if config.trace.enabled {
            Arc::new(
                TracingTrace::new(config.trace.include_misses)
                    .with_glue(config.context.glue.clone()),
            )
        } else {
            Arc::new(NoopTrace)
        };

        Self {
            max_depth: config.chain.max_depth.max(1),
            glue: config.context.glue.clone(),
            trace,
        }
    }

    /// Replace the trace sink
    #[must_use]
    pub fn with_trace(mut self, trace: SharedTrace) -> Self {
        self.trace = trace;
        self
    }

    /// Replace the depth bound (at least 1)
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Depth bound for chain walks
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Separator between a message context and its key
    pub fn glue(&self) -> &str {
        &self.glue
    }

    /// Translation of `key` from anywhere along the chain, or `key` itself
    pub fn gettext<'a>(&self, catalog: &'a dyn Catalog, key: &'a str) -> Cow<'a, str> {
        self.generic(catalog, key)
            .unwrap_or_else(|| self.untranslated(key, None))
    }

    /// Plural-aware translation of `key` for count `n`
    ///
    /// Falls back to `key_plural` when `n != 1`, else to `key`.
    pub fn ngettext<'a>(
        &self,
        catalog: &'a dyn Catalog,
        key: &'a str,
        key_plural: &'a str,
        n: i64,
    ) -> Cow<'a, str> {
        self.plural(catalog, key, n)
            .unwrap_or_else(|| self.untranslated_plural(key, key_plural, n))
    }

    /// Translation of `key` in `context`, or `key` itself
    pub fn pgettext<'a>(&self, catalog: &'a dyn Catalog, context: &str, key: &'a str) -> Cow<'a, str> {
        let glued = glue_context(context, key, &self.glue);
        self.generic(catalog, &glued)
            .unwrap_or_else(|| self.untranslated(key, None))
    }

    /// Plural-aware translation of `key` in `context` for count `n`
    pub fn npgettext<'a>(
        &self,
        catalog: &'a dyn Catalog,
        context: &str,
        key: &'a str,
        key_plural: &'a str,
        n: i64,
    ) -> Cow<'a, str> {
        let glued = glue_context(context, key, &self.glue);
        self.plural(catalog, &glued, n)
            .unwrap_or_else(|| self.untranslated_plural(key, key_plural, n))
    }

    /// Dispatch on the shape of `id`; `n` defaults to 1 for plural ids
    pub fn resolve<'a>(&self, catalog: &'a dyn Catalog, id: &'a MessageId, n: Option<i64>) -> Cow<'a, str> {
        let n = n.unwrap_or(1);
        match (id.context.as_deref(), id.plural.as_deref()) {
            (None, None) => self.gettext(catalog, &id.key),
            (Some(context), None) => self.pgettext(catalog, context, &id.key),
            (None, Some(plural)) => self.ngettext(catalog, &id.key, plural, n),
            (Some(context), Some(plural)) => self.npgettext(catalog, context, &id.key, plural, n),
        }
    }

    fn generic<'a>(&self, catalog: &'a dyn Catalog, key: &str) -> Option<Cow<'a, str>> {
        let (found, truncated) = self.walk_generic(catalog, key);
        if found.is_none() && truncated {
            self.truncated(key);
        }
        found
    }

    /// Generic lookup, reporting whether the depth bound cut the walk short
    fn walk_generic<'a>(&self, catalog: &'a dyn Catalog, key: &str) -> (Option<Cow<'a, str>>, bool) {
        let mut walk = CatalogChain::new(catalog, self.max_depth);
        let found = generic_lookup(&mut walk, key);

        self.trace.record(&TraceEvent::GenericLookup {
            key,
            found: found.is_some(),
        });
        (found, walk.is_truncated())
    }

    fn plural<'a>(&self, catalog: &'a dyn Catalog, key: &str, n: i64) -> Option<Cow<'a, str>> {
        let mut walk = CatalogChain::new(catalog, self.max_depth);

        for (depth, level) in walk.by_ref().enumerate() {
            let locale = level.locale();

            if let Some(plural) = level.as_plural() {
                let value = match plural.lookup_entry(key) {
                    Some(Entry::Plural(forms)) => {
                        let index = plural.plural_index(n);
                        if index >= forms.len() && !forms.is_empty() {
                            self.trace.record(&TraceEvent::PluralIndexClamped {
                                key,
                                locale,
                                index,
                                forms: forms.len(),
                            });
                        }
                        Entry::Plural(forms).select(index)
                    }
                    Some(single) => single.singular(),
                    None => None,
                };
                if let Some(value) = value {
                    self.hit(key, depth, locale, Capability::Plural);
                    return Some(value);
                }
                self.miss(key, depth, locale, Capability::Plural);
            } else if let Some(plain) = level.as_plain() {
                if let Some(value) = plain.lookup(key) {
                    self.hit(key, depth, locale, Capability::Plain);
                    return Some(value);
                }
                self.miss(key, depth, locale, Capability::Plain);
            } else {
                self.trace
                    .record(&TraceEvent::WalkStopped { key, depth, locale });
                break;
            }
        }

        let (found, generic_truncated) = self.walk_generic(catalog, key);
        if walk.is_truncated() || (found.is_none() && generic_truncated) {
            self.truncated(key);
        }
        found
    }

    fn truncated(&self, key: &str) {
        self.trace.record(&TraceEvent::ChainTruncated {
            key,
            max_depth: self.max_depth,
        });
    }

    fn hit(&self, key: &str, depth: usize, locale: Option<&LanguageIdentifier>, capability: Capability) {
        self.trace.record(&TraceEvent::Hit {
            key,
            depth,
            locale,
            capability,
        });
    }

    fn miss(&self, key: &str, depth: usize, locale: Option<&LanguageIdentifier>, capability: Capability) {
        self.trace.record(&TraceEvent::Miss {
            key,
            depth,
            locale,
            capability,
        });
    }

    fn untranslated<'a>(&self, key: &'a str, n: Option<i64>) -> Cow<'a, str> {
        self.trace.record(&TraceEvent::Untranslated { key, n });
        Cow::Borrowed(key)
    }

    fn untranslated_plural<'a>(&self, key: &'a str, key_plural: &'a str, n: i64) -> Cow<'a, str> {
        let text = if n == 1 { key } else { key_plural };
        self.untranslated(text, Some(n))
    }
}

/// [`MessageLookup::gettext`] with default settings
pub fn gettext<'a>(catalog: &'a dyn Catalog, key: &'a str) -> Cow<'a, str> {
    DEFAULT_LOOKUP.gettext(catalog, key)
}

/// [`MessageLookup::ngettext`] with default settings
pub fn ngettext<'a>(catalog: &'a dyn Catalog, key: &'a str, key_plural: &'a str, n: i64) -> Cow<'a, str> {
    DEFAULT_LOOKUP.ngettext(catalog, key, key_plural, n)
}

/// [`MessageLookup::pgettext`] with default settings
pub fn pgettext<'a>(catalog: &'a dyn Catalog, context: &str, key: &'a str) -> Cow<'a, str> {
    DEFAULT_LOOKUP.pgettext(catalog, context, key)
}

/// [`MessageLookup::npgettext`] with default settings
pub fn npgettext<'a>(
    catalog: &'a dyn Catalog,
    context: &str,
    key: &'a str,
    key_plural: &'a str,
    n: i64,
) -> Cow<'a, str> {
    DEFAULT_LOOKUP.npgettext(catalog, context, key, key_plural, n)
}
