//! # msgchain config
//!
//! Type-safe configuration for the message lookup helper.
//!
//! This crate provides configuration loading from TOML, YAML or JSON files,
//! environment overrides, defaults, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
