//! Strand: a string commons library for byte-oriented text handling.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Strand sub-crates. For most users, adding `strand` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! // Build up a file name in a growable buffer.
//! let mut name = StrBuf::from("report");
//! name.append(b".txt");
//! assert!(strand::glob::match_bytes(b"*.txt", name.as_bytes()));
//!
//! // Pool a batch of per-request strings and release them together.
//! let mut pool = PoolStack::new();
//! pool.push();
//! let stored = pool.add(name.as_bytes());
//! assert_eq!(pool.get(stored), b"report.txt");
//! pool.pop().unwrap();
//!
//! // Substitute typed arguments into a format string.
//! let parsed = FormatString::parse("%s is %d bytes");
//! let mut line = StrBuf::new();
//! strand::fmt::append_formatted(
//!     &mut line,
//!     &parsed,
//!     &[FormatArg::Str(Some(b"report.txt")), FormatArg::Int(10)],
//! )
//! .unwrap();
//! assert_eq!(line, "report.txt is 10 bytes");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strand-core` | Error taxonomy, character sets, byte scanning |
//! | [`buf`] | `strand-buf` | The growable `StrBuf` buffer |
//! | [`pool`] | `strand-pool` | Block-pooled arena, stack-scoped release, handles |
//! | [`glob`] | `strand-glob` | `*`/`?` wildcard matching |
//! | [`fmt`] | `strand-fmt` | Format parsing and argument substitution |
//! | [`io`] | `strand-io` | Line- and chunk-oriented text reading |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error taxonomy, character sets, and byte scanning (`strand-core`).
///
/// [`types::TextError`] is the shared error type for every fallible
/// operation in the library; [`types::chars`] holds the whitespace and
/// newline byte sets; [`types::scan`] has the skip/seek helpers.
pub use strand_core as types;

/// The growable string buffer (`strand-buf`).
///
/// [`buf::StrBuf`] is the value type the rest of the library reads
/// from and appends into — also available in the [`prelude`].
pub use strand_buf as buf;

/// Block-pooled string storage (`strand-pool`).
///
/// [`pool::StringPool`] packs strings into fixed-size blocks,
/// [`pool::PoolStack`] adds scoped bulk release, and [`pool::PoolRef`]
/// is the stable handle both hand out.
pub use strand_pool as pool;

/// Wildcard pattern matching (`strand-glob`).
///
/// [`glob::match_bytes`] and [`glob::matches`] match `*`/`?` patterns
/// against whole subjects; [`glob::match_qmark`] and
/// [`glob::find_qmark`] are the star-free building blocks.
pub use strand_glob as glob;

/// Printf-style formatting (`strand-fmt`).
///
/// Parse with [`fmt::FormatString::parse`], then render with
/// [`fmt::append_formatted`] or a configured [`fmt::Formatter`].
pub use strand_fmt as fmt;

/// Text input (`strand-io`).
///
/// [`io::TextReader`] reads lines or fixed chunks from any buffered
/// source into a [`buf::StrBuf`].
pub use strand_io as io;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
///
/// This imports the buffer, the pool types, the formatting entry
/// points, the text reader, and the shared error type.
pub mod prelude {
    // Buffer
    pub use strand_buf::StrBuf;

    // Pooled storage
    pub use strand_pool::{PoolLocation, PoolRef, PoolStack, StringPool};

    // Formatting
    pub use strand_fmt::{FormatArg, FormatString, Formatter, PieceKind};

    // Text input
    pub use strand_io::TextReader;

    // Errors
    pub use strand_core::TextError;
}
