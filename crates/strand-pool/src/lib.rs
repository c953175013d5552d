//! Block-pooled string storage.
//!
//! [`StringPool`] packs many small strings into fixed-size storage
//! blocks, avoiding per-string heap allocations and the fragmentation
//! they cause. Strings too large for the pool get a dedicated
//! standalone block so they cannot starve the shared space.
//!
//! [`PoolStack`] layers stack-scoped bulk release on top: [`PoolStack::push`]
//! checkpoints the write position, and [`PoolStack::pop`] zeroes and
//! reclaims everything added since — suited to per-request or per-scope
//! transient string storage.
//!
//! Strings are addressed by opaque [`PoolRef`] handles rather than raw
//! pointers, so pool growth can never dangle an external reference.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod handle;
mod pool;
mod stack;

pub use handle::{PoolLocation, PoolRef};
pub use pool::StringPool;
pub use stack::PoolStack;
