//! Shared foundations for the strand string commons.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy used by every other strand crate, the standard
//! character-set constants, and low-level byte scanning helpers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chars;
pub mod error;
pub mod scan;

pub use error::TextError;
