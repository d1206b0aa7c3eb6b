//! Diagnostic trace events for lookups
//!
//! Traces never influence results. The default sink drops everything.

use crate::locale::locale_label;
use msgchain_common::{split_context, truncate_for_log, CONTEXT_GLUE};
use std::fmt;
use unic_langid::LanguageIdentifier;

const MAX_KEY_CHARS: usize = 48;

/// Capability a catalog was consulted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Plain lookup
    Plain,
    /// Plural-aware lookup
    Plural,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Plural => "plural",
        })
    }
}

/// Something that happened during a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// A catalog in the chain had the key.
    Hit {
        key: &'a str,
        depth: usize,
        locale: Option<&'a LanguageIdentifier>,
        capability: Capability,
    },
    /// A catalog in the chain did not have the key.
    Miss {
        key: &'a str,
        depth: usize,
        locale: Option<&'a LanguageIdentifier>,
        capability: Capability,
    },
    /// The plural rule produced an index past the available forms.
    PluralIndexClamped {
        key: &'a str,
        locale: Option<&'a LanguageIdentifier>,
        index: usize,
        forms: usize,
    },
    /// A catalog exposed no lookup capability, ending the plural walk.
    WalkStopped {
        key: &'a str,
        depth: usize,
        locale: Option<&'a LanguageIdentifier>,
    },
    /// The depth bound cut the chain short.
    ChainTruncated { key: &'a str, max_depth: usize },
    /// The generic lookup on the starting catalog was consulted.
    GenericLookup { key: &'a str, found: bool },
    /// No catalog had the key; the untranslated text was returned.
    Untranslated { key: &'a str, n: Option<i64> },
}

impl<'a> TraceEvent<'a> {
    /// Lookup key the event is about; glued with its context, if any.
    pub const fn key(&self) -> &'a str {
        match *self {
            Self::Hit { key, .. }
            | Self::Miss { key, .. }
            | Self::PluralIndexClamped { key, .. }
            | Self::WalkStopped { key, .. }
            | Self::ChainTruncated { key, .. }
            | Self::GenericLookup { key, .. }
            | Self::Untranslated { key, .. } => key,
        }
    }
}

/// Receiver for trace events.
pub trait TraceSink: fmt::Debug {
    /// Record one event.
    fn record(&self, event: &TraceEvent<'_>);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn record(&self, _event: &TraceEvent<'_>) {}
}

/// Sink that forwards events to `tracing`.
///
/// Context-qualified keys are split on the glue so the context is logged as
/// its own field.
#[derive(Debug, Clone)]
pub struct TracingTrace {
    include_misses: bool,
    glue: String,
}

impl Default for TracingTrace {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TracingTrace {
    /// Create a sink; misses are only forwarded when `include_misses` is set.
    pub fn new(include_misses: bool) -> Self {
        Self {
            include_misses,
            glue: CONTEXT_GLUE.to_string(),
        }
    }

    /// Separator between context and key in the keys this sink receives
    #[must_use]
    pub fn with_glue(mut self, glue: impl Into<String>) -> Self {
        self.glue = glue.into();
        self
    }

    /// Context and key labels for a lookup key, truncated for logging
    pub fn key_fields(&self, key: &str) -> (String, String) {
        let (context, key) = split_context(key, &self.glue);
        (
            context
                .map(|c| truncate_for_log(c, MAX_KEY_CHARS))
                .unwrap_or_default(),
            truncate_for_log(key, MAX_KEY_CHARS),
        )
    }
}

impl TraceSink for TracingTrace {
    fn record(&self, event: &TraceEvent<'_>) {
        if matches!(event, TraceEvent::Miss { .. }) && !self.include_misses {
            return;
        }
        let (context, key) = self.key_fields(event.key());

        match *event {
            TraceEvent::Hit {
                depth,
                locale,
                capability,
                ..
            } => tracing::debug!(
                %key,
                %context,
                depth,
                locale = %locale_label(locale),
                %capability,
                "translation found"
            ),
            TraceEvent::Miss {
                depth,
                locale,
                capability,
                ..
            } => tracing::debug!(
                %key,
                %context,
                depth,
                locale = %locale_label(locale),
                %capability,
                "no translation in catalog"
            ),
            TraceEvent::PluralIndexClamped {
                locale,
                index,
                forms,
                ..
            } => tracing::warn!(
                %key,
                %context,
                locale = %locale_label(locale),
                index,
                forms,
                "plural index out of range, using form 0"
            ),
            TraceEvent::WalkStopped { depth, locale, .. } => tracing::debug!(
                %key,
                %context,
                depth,
                locale = %locale_label(locale),
                "catalog exposes no lookup capability, stopping walk"
            ),
            TraceEvent::ChainTruncated { max_depth, .. } => tracing::warn!(
                %key,
                %context,
                max_depth,
                "catalog chain exceeds depth bound, possible parent cycle"
            ),
            TraceEvent::GenericLookup { found, .. } => tracing::debug!(
                %key,
                %context,
                found,
                "generic lookup"
            ),
            TraceEvent::Untranslated { n, .. } => tracing::debug!(
                %key,
                %context,
                n = ?n,
                "returning untranslated text"
            ),
        }
    }
}
