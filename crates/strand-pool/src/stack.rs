//! Stack-scoped bulk release on top of [`StringPool`].

use smallvec::SmallVec;
use strand_core::TextError;

use crate::handle::PoolRef;
use crate::pool::StringPool;

/// Write-position checkpoint: (block index, bytes used in that block).
type Mark = (usize, usize);

/// A [`StringPool`] with nested release scopes.
///
/// [`push`](Self::push) opens a scope by recording the pool's write
/// position; [`pop`](Self::pop) closes the most recent scope, zeroing
/// and reclaiming every string added since the matching push. Blocks
/// freed by a pop are kept and recycled by later additions.
///
/// Handles from a released scope stay safe to resolve; they read as
/// empty until their storage is reused.
pub struct PoolStack {
    pool: StringPool,
    marks: SmallVec<[Mark; 8]>,
}

impl PoolStack {
    /// Creates a stack over a pool with the default block size.
    pub fn new() -> Self {
        Self {
            pool: StringPool::new(),
            marks: SmallVec::new(),
        }
    }

    /// Creates a stack over a pool with `kb`-kilobyte blocks.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidArgument`] if `kb` is zero.
    pub fn with_block_kb(kb: usize) -> Result<Self, TextError> {
        Ok(Self {
            pool: StringPool::with_block_kb(kb)?,
            marks: SmallVec::new(),
        })
    }

    /// Current nesting depth; zero at the base level.
    pub fn level(&self) -> usize {
        self.marks.len()
    }

    /// Opens a release scope and returns the new depth.
    pub fn push(&mut self) -> usize {
        self.marks.push(self.pool.mark());
        self.marks.len()
    }

    /// Closes the most recent scope, releasing everything added since
    /// the matching [`push`](Self::push). Returns the new depth.
    ///
    /// Standalone entries keep their dedicated allocations until the
    /// stack itself is dropped; only block storage is rewound.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::EmptyStack`] at the base level.
    pub fn pop(&mut self) -> Result<usize, TextError> {
        let (block, used) = self.marks.pop().ok_or(TextError::EmptyStack)?;
        self.pool.rewind_to(block, used);
        Ok(self.marks.len())
    }

    /// Copies `src` into the current scope. See [`StringPool::add`].
    pub fn add(&mut self, src: &[u8]) -> PoolRef {
        self.pool.add(src)
    }

    /// Copies `src` with extra reserved space. See
    /// [`StringPool::add_reserved`].
    pub fn add_reserved(&mut self, src: &[u8], reserve: usize) -> PoolRef {
        self.pool.add_reserved(src, reserve)
    }

    /// Resolves a handle. See [`StringPool::get`].
    pub fn get(&self, handle: PoolRef) -> &[u8] {
        self.pool.get(handle)
    }

    /// Resolves a handle for in-place mutation. See
    /// [`StringPool::get_mut`].
    pub fn get_mut(&mut self, handle: PoolRef) -> &mut [u8] {
        self.pool.get_mut(handle)
    }

    /// Block size in bytes of the underlying pool.
    pub fn block_size(&self) -> usize {
        self.pool.block_size()
    }

    /// Number of blocks held by the underlying pool.
    pub fn block_count(&self) -> usize {
        self.pool.block_count()
    }

    /// Total backing storage held by the underlying pool.
    pub fn memory_bytes(&self) -> usize {
        self.pool.memory_bytes()
    }
}

impl Default for PoolStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_track_depth() {
        let mut stack = PoolStack::new();
        assert_eq!(stack.level(), 0);
        assert_eq!(stack.push(), 1);
        assert_eq!(stack.push(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert_eq!(stack.pop().unwrap(), 0);
    }

    #[test]
    fn pop_at_base_level_fails() {
        let mut stack = PoolStack::new();
        assert_eq!(stack.pop(), Err(TextError::EmptyStack));
    }

    #[test]
    fn pop_zeroes_strings_added_in_the_scope() {
        let mut stack = PoolStack::new();
        let kept = stack.add(b"kept");
        stack.push();
        let gone = stack.add(b"gone");
        assert_eq!(stack.get(gone), b"gone");
        stack.pop().unwrap();
        assert_eq!(stack.get(gone), b"");
        assert_eq!(stack.get(kept), b"kept");
    }

    #[test]
    fn pop_releases_whole_blocks_for_reuse() {
        let mut stack = PoolStack::with_block_kb(1).unwrap();
        stack.push();
        for _ in 0..30 {
            stack.add(&[b'z'; 99]);
        }
        let grown = stack.block_count();
        assert!(grown > 1);
        stack.pop().unwrap();
        // Released blocks are recycled rather than reallocated.
        stack.push();
        for _ in 0..30 {
            stack.add(&[b'z'; 99]);
        }
        assert_eq!(stack.block_count(), grown);
    }

    #[test]
    fn nested_scopes_release_independently() {
        let mut stack = PoolStack::new();
        let outer = stack.add(b"outer");
        stack.push();
        let mid = stack.add(b"mid");
        stack.push();
        let inner = stack.add(b"inner");

        stack.pop().unwrap();
        assert_eq!(stack.get(inner), b"");
        assert_eq!(stack.get(mid), b"mid");

        stack.pop().unwrap();
        assert_eq!(stack.get(mid), b"");
        assert_eq!(stack.get(outer), b"outer");
    }

    #[test]
    fn storage_freed_by_pop_is_reused() {
        let mut stack = PoolStack::new();
        stack.push();
        let first = stack.add(b"first");
        stack.pop().unwrap();
        stack.push();
        let second = stack.add(b"again");
        assert_eq!(first.location(), second.location());
        assert_eq!(stack.get(second), b"again");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn entry() -> impl Strategy<Value = Vec<u8>> {
            proptest::collection::vec(1u8..=255, 0..40)
        }

        proptest! {
            #[test]
            fn pop_never_disturbs_earlier_scopes(
                before in proptest::collection::vec(entry(), 1..20),
                during in proptest::collection::vec(entry(), 1..40),
            ) {
                let mut stack = PoolStack::with_block_kb(1).unwrap();
                let kept: Vec<_> =
                    before.iter().map(|e| stack.add(e)).collect();
                stack.push();
                let doomed: Vec<_> =
                    during.iter().map(|e| stack.add(e)).collect();
                stack.pop().unwrap();

                for (h, e) in kept.iter().zip(&before) {
                    prop_assert_eq!(stack.get(*h), &e[..]);
                }
                for h in &doomed {
                    prop_assert_eq!(stack.get(*h), b"" as &[u8]);
                }
            }

            #[test]
            fn balanced_push_pop_restores_the_write_position(
                entries in proptest::collection::vec(entry(), 1..40),
            ) {
                let mut stack = PoolStack::with_block_kb(1).unwrap();
                let anchor = stack.add(b"anchor");
                stack.push();
                for e in &entries {
                    stack.add(e);
                }
                stack.pop().unwrap();
                let replay = stack.add(b"replay");
                // The next addition lands right where the scope began.
                prop_assert_eq!(anchor.location(), replay.location());
                prop_assert_eq!(stack.get(replay), b"replay" as &[u8]);
            }
        }
    }
}
