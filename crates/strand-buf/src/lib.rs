//! Growable byte-string buffers.
//!
//! [`StrBuf`] stores a mutable byte sequence in one contiguous,
//! NUL-terminated allocation and grows it by doubling when an
//! operation needs more room. Positions are byte indices. The buffer
//! is a plain value type: no interior mutability, no sharing, and no
//! raw storage references that could dangle across a reallocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buf;

pub use buf::StrBuf;
