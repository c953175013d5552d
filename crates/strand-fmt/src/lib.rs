//! Printf-style formatting with typed arguments.
//!
//! [`FormatString::parse`] splits a format string into literal runs
//! and `%` conversions, classifying each conversion as integer, float,
//! string, or pointer. [`append_formatted`] then substitutes a slice
//! of [`FormatArg`] values positionally, appending the result to a
//! [`StrBuf`](strand_buf::StrBuf). Each argument's variant must agree
//! with its conversion's kind; a mismatch or a missing argument is an
//! error, never a misread.
//!
//! Parsing is tolerant the way printf implementations are: an unknown
//! conversion character keeps its raw text as a literal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod parse;
mod render;

pub use parse::{FormatString, PieceKind};
pub use render::{append_formatted, FormatArg, Formatter};
