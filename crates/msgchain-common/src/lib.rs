//! # msgchain common
//!
//! Shared types, message-context helpers, and test utilities for msgchain.
//!
//! This crate provides the foundational types used across the other crates
//! in the msgchain workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;
