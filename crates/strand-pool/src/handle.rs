//! Opaque handles into a [`StringPool`](crate::StringPool).

use std::fmt;

/// Which backing allocation a pooled string lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoolLocation {
    /// Stored inside a shared pool block.
    Block {
        /// Index of the block within the pool.
        index: usize,
    },
    /// Stored in a dedicated standalone allocation.
    Standalone {
        /// Index into the pool's standalone list.
        index: usize,
    },
}

/// Handle to a string stored in a [`StringPool`](crate::StringPool).
///
/// A `PoolRef` stays valid for the lifetime of the pool, or until a
/// [`PoolStack::pop`](crate::PoolStack::pop) releases the level it was
/// added under. It carries no lifetime of its own; resolving it through
/// a pool that has since released the entry yields the zeroed (empty)
/// contents, never a dangling read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use = "a pooled string is unreachable without its PoolRef"]
pub struct PoolRef {
    pub(crate) location: PoolLocation,
    pub(crate) offset: usize,
    pub(crate) cap: usize,
}

impl PoolRef {
    /// Where the string is stored.
    pub fn location(&self) -> PoolLocation {
        self.location
    }

    /// Reserved capacity in bytes, excluding the NUL terminator.
    ///
    /// This is at least the length of the string the handle was created
    /// for, and more if extra space was reserved up front.
    pub fn capacity(&self) -> usize {
        self.cap
    }
}

impl fmt::Display for PoolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            PoolLocation::Block { index } => {
                write!(f, "block {}+{} ({} bytes)", index, self.offset, self.cap)
            }
            PoolLocation::Standalone { index } => {
                write!(f, "standalone {} ({} bytes)", index, self.cap)
            }
        }
    }
}
