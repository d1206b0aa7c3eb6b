//! # msgchain i18n
//!
//! gettext-style message lookup over chains of locale catalogs.
//!
//! This crate provides:
//!
//! - A capability contract for catalogs ([`Catalog`], [`PlainLookup`],
//!   [`PluralLookup`]) so that catalogs only implement what they support
//! - Parent-chain traversal with self-reference and depth guards
//! - gettext plural rules
//! - An in-memory catalog and a Fluent-backed catalog
//! - The lookup helper: `gettext`, `ngettext`, `pgettext`, `npgettext`
//!
//! # Example
//!
//! ```rust
//! use msgchain_i18n::{gettext, ngettext, MapCatalog};
//!
//! let root = MapCatalog::root().into_shared();
//! let de = MapCatalog::new("de")
//!     .unwrap()
//!     .with_plural("file", ["Datei", "Dateien"])
//!     .with_parent(root)
//!     .into_shared();
//! let de_de = MapCatalog::new("de_DE").unwrap().with_parent(de);
//!
//! assert_eq!(ngettext(&de_de, "file", "files", 5), "Dateien");
//! assert_eq!(gettext(&de_de, "Hello"), "Hello");
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod locale;
pub mod lookup;
pub mod map_catalog;
pub mod plural;
pub mod resource;
pub mod trace;

pub use bundle::FluentCatalog;
pub use catalog::{chain, Catalog, CatalogChain, Entry, PlainLookup, PluralLookup, SharedCatalog};
pub use error::{I18nError, I18nResult};
pub use locale::parse_locale;
pub use lookup::{gettext, ngettext, npgettext, pgettext, MessageLookup, SharedTrace};
pub use map_catalog::MapCatalog;
pub use plural::PluralRule;
pub use resource::{load_fluent_catalog, ChainBuilder};
pub use trace::{Capability, NoopTrace, TraceEvent, TraceSink, TracingTrace};

// Re-export the identifier type catalogs report their locale with
pub use unic_langid::LanguageIdentifier;
