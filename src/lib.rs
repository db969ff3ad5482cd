// SPDX-License-Identifier: FSL-1.1
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

//! LIFO

/// Errors produced by this library
pub mod error;
pub use error::{Error, StackError};

/// Storage traits
pub mod storage;
pub use storage::Lifo;

/// The vector-backed stack
pub mod stack;
pub use stack::{Builder, Stack};

/// ...and in the darkness bind them
pub mod prelude {
    pub use super::*;
}
