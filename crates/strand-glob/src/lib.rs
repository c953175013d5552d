//! Glob matching over byte strings.
//!
//! Two wildcards are recognised: `?` matches exactly one byte and `*`
//! matches any run of bytes, including an empty one. Everything else
//! matches itself. There are no character classes, no escapes, and no
//! special treatment of path separators.
//!
//! Matching is anchored at both ends: the pattern must account for the
//! whole subject. `*.txt` matches `report.txt` but not `report.txtx`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod matcher;

pub use matcher::{find_qmark, match_bytes, match_qmark, matches};
