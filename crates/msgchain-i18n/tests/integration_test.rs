//! Integration tests for the message lookup helper.
//!
//! These tests build catalog chains out of the shipped catalog types and a
//! few hand-written ones, then check the fallback order end to end.

use msgchain_common::test_utils::{catalog_fixtures, init_test_logging};
use msgchain_i18n::{
    gettext, ngettext, pgettext, Catalog, FluentCatalog, MapCatalog, MessageLookup, PlainLookup,
    SharedCatalog, TraceEvent, TraceSink,
};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Sink that remembers the debug form of every event
#[derive(Debug, Default)]
struct RecordingTrace {
    events: Mutex<Vec<String>>,
}

impl RecordingTrace {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn saw(&self, variant: &str) -> bool {
        self.events().iter().any(|e| e.starts_with(variant))
    }

    fn count(&self, variant: &str) -> usize {
        self.events().iter().filter(|e| e.starts_with(variant)).count()
    }
}

impl TraceSink for RecordingTrace {
    fn record(&self, event: &TraceEvent<'_>) {
        self.events.lock().unwrap().push(format!("{event:?}"));
    }
}

/// Catalog from another provider: no capabilities, only a native lookup
#[derive(Debug)]
struct PropertiesCatalog {
    values: HashMap<&'static str, &'static str>,
    parent: Option<SharedCatalog>,
}

impl Catalog for PropertiesCatalog {
    fn parent(&self) -> Option<&dyn Catalog> {
        self.parent.as_deref().map(|p| p as &dyn Catalog)
    }

    fn native_lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.values.get(key).map(|v| Cow::Borrowed(*v))
    }
}

/// Two catalogs naming each other as parent
struct Ring {
    name: &'static str,
    next: &'static Ring,
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring").field("name", &self.name).finish()
    }
}

impl PlainLookup for Ring {
    fn lookup(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl Catalog for Ring {
    fn as_plain(&self) -> Option<&dyn PlainLookup> {
        Some(self)
    }

    fn parent(&self) -> Option<&dyn Catalog> {
        Some(self.next)
    }
}

static RING_A: Ring = Ring {
    name: "a",
    next: &RING_B,
};
static RING_B: Ring = Ring {
    name: "b",
    next: &RING_A,
};

/// `de_DE -> de -> root`, only `de` has plural forms for "file"
fn german_chain() -> MapCatalog {
    let root = MapCatalog::root().into_shared();
    let de = MapCatalog::new("de")
        .unwrap()
        .with_plural("file", ["Datei", "Dateien"])
        .with_parent(root)
        .into_shared();
    MapCatalog::new("de_DE").unwrap().with_parent(de)
}

#[test]
fn test_plural_form_found_in_ancestor() {
    init_test_logging();
    let catalog = german_chain();

    assert_eq!(ngettext(&catalog, "file", "files", 5), "Dateien");
    assert_eq!(ngettext(&catalog, "file", "files", 1), "Datei");
}

#[test]
fn test_untranslated_key_is_returned_unchanged() {
    let catalog = german_chain();
    assert_eq!(gettext(&catalog, "Hello"), "Hello");
    assert_eq!(ngettext(&catalog, "Hello", "Hellos", 1), "Hello");
    assert_eq!(ngettext(&catalog, "Hello", "Hellos", 2), "Hellos");
}

#[test]
fn test_nearer_catalog_wins() {
    let de = MapCatalog::new("de")
        .unwrap()
        .with_message("hello", "Hallo")
        .with_plural("file", ["Datei", "Dateien"])
        .into_shared();
    let de_at = MapCatalog::new("de_AT")
        .unwrap()
        .with_message("hello", "Servus")
        .with_plural("file", ["Akt", "Akten"])
        .with_parent(de);

    assert_eq!(gettext(&de_at, "hello"), "Servus");
    assert_eq!(ngettext(&de_at, "hello", "hellos", 3), "Servus");
    assert_eq!(ngettext(&de_at, "file", "files", 3), "Akten");
}

#[test]
fn test_fluent_chain_from_fixtures() {
    let en: SharedCatalog = FluentCatalog::from_source("en", catalog_fixtures::en_ftl())
        .unwrap()
        .into_shared();
    let de = FluentCatalog::from_source("de", catalog_fixtures::de_ftl())
        .unwrap()
        .with_parent(en)
        .into_shared();
    let de_de = FluentCatalog::from_source("de-DE", catalog_fixtures::de_de_ftl())
        .unwrap()
        .with_parent(de);

    assert_eq!(gettext(&de_de, "hello"), "Servus!");
    assert_eq!(gettext(&de_de, "save"), "Speichern");
    assert!(gettext(&de_de, "greeting").starts_with("Welcome, "));
    assert_eq!(gettext(&de_de, "quit"), "quit");
}

#[test]
fn test_plain_catalog_answers_independently_of_count() {
    let root = MapCatalog::root().with_message("file", "file").into_shared();
    let de = FluentCatalog::from_source("de", catalog_fixtures::de_ftl())
        .unwrap()
        .with_parent(root)
        .into_shared();
    let de_de = MapCatalog::new("de_DE").unwrap().with_parent(de);

    for n in [0, 1, 2, 100] {
        assert_eq!(ngettext(&de_de, "file", "files", n), "Datei");
    }
}

#[test]
fn test_non_participating_catalog_routes_to_generic_lookup() {
    let de = MapCatalog::new("de")
        .unwrap()
        .with_plural("file", ["Datei", "Dateien"])
        .into_shared();
    let props = PropertiesCatalog {
        values: HashMap::from([("Hello", "Grüß Gott")]),
        parent: Some(de),
    };

    let trace = Arc::new(RecordingTrace::default());
    let lookup = MessageLookup::new().with_trace(trace.clone());

    // The plural walk stops at once; the generic lookup reads the singular
    // form further up the chain.
    assert_eq!(lookup.ngettext(&props, "file", "files", 5), "Datei");
    assert!(trace.saw("WalkStopped"));
    assert!(trace.saw("GenericLookup { key: \"file\", found: true }"));

    assert_eq!(lookup.ngettext(&props, "Hello", "Hellos", 5), "Grüß Gott");
    assert_eq!(lookup.gettext(&props, "Hello"), "Grüß Gott");
    assert_eq!(lookup.gettext(&props, "Bye"), "Bye");
}

#[test]
fn test_parent_cycle_is_cut_by_depth_bound() {
    let trace = Arc::new(RecordingTrace::default());
    let lookup = MessageLookup::new()
        .with_max_depth(10)
        .with_trace(trace.clone());

    assert_eq!(lookup.ngettext(&RING_A, "file", "files", 2), "files");
    assert_eq!(trace.count("ChainTruncated"), 1);
    assert_eq!(trace.count("Miss"), 10);

    assert_eq!(lookup.gettext(&RING_B, "file"), "file");
    assert_eq!(trace.count("ChainTruncated"), 2);
}

#[test]
fn test_truncation_reported_once_per_plural_lookup() {
    let trace = Arc::new(RecordingTrace::default());
    let lookup = MessageLookup::new()
        .with_max_depth(3)
        .with_trace(trace.clone());

    let root = MapCatalog::root().with_message("file", "Datei").into_shared();
    let middle = MapCatalog::new("de").unwrap().with_parent(root).into_shared();
    let upper = MapCatalog::new("de_DE").unwrap().with_parent(middle).into_shared();
    let start = MapCatalog::new("de_AT").unwrap().with_parent(upper);

    assert_eq!(lookup.ngettext(&start, "folder", "folders", 2), "folders");
    assert_eq!(trace.count("ChainTruncated"), 1);
    assert_eq!(trace.count("GenericLookup"), 1);
}

#[test]
fn test_negative_count_agrees_with_untranslated_fallback() {
    let catalog = german_chain();

    assert_eq!(ngettext(&catalog, "file", "files", -1), "Dateien");
    assert_eq!(ngettext(&catalog, "folder", "folders", -1), "folders");
}

#[test]
fn test_clamped_index_is_traced() {
    let catalog = MapCatalog::new("ru")
        .unwrap()
        .with_plural("file", ["файл", "файла"]);

    let trace = Arc::new(RecordingTrace::default());
    let lookup = MessageLookup::new().with_trace(trace.clone());

    // Russian selects form 2 for 5, but only two forms exist
    assert_eq!(lookup.ngettext(&catalog, "file", "files", 5), "файл");
    assert_eq!(lookup.ngettext(&catalog, "file", "files", 3), "файла");
    assert!(trace.saw("PluralIndexClamped"));
}

#[test]
fn test_context_miss_returns_bare_key() {
    let catalog = MapCatalog::new("de")
        .unwrap()
        .with_message("menu\u{4}Open", "Öffnen");

    assert_eq!(pgettext(&catalog, "menu", "Open"), "Öffnen");
    assert_eq!(pgettext(&catalog, "dialog", "Open"), "Open");
}

#[test]
fn test_shared_chain_across_threads() {
    let catalog: SharedCatalog = Arc::new(german_chain());

    let handles: Vec<_> = (0..4_i64)
        .map(|n| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || ngettext(catalog.as_ref(), "file", "files", n).into_owned())
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["Dateien", "Datei", "Dateien", "Dateien"]);
}
