//! # msgchain
//!
//! Command line front end for the message lookup helper. Loads a chain of
//! Fluent catalogs given most specific first and prints the resolved text
//! for one message.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod args;
pub mod error;

pub use app::*;
pub use args::*;
pub use error::*;
