//! Text input on top of [`StrBuf`](strand_buf::StrBuf).
//!
//! [`TextReader`] wraps any [`BufRead`](std::io::BufRead) source and
//! pulls text into a caller-supplied buffer, a line or a chunk at a
//! time. Lines are what remains between newline bytes: blank lines are
//! skipped, terminators are stripped, and NUL bytes are filtered out
//! so the buffer's terminator invariant cannot be violated by the
//! input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod reader;

pub use reader::TextReader;
