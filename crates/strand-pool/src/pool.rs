//! The block-pooled string arena.

use strand_core::TextError;

use crate::handle::{PoolLocation, PoolRef};

/// Arena that packs NUL-terminated strings into fixed-size blocks.
///
/// Strings are appended to the current block until it cannot hold the
/// next entry, at which point the pool advances to a fresh (or
/// recycled) block. An entry larger than half a block would waste too
/// much shared space, so it gets its own standalone allocation instead.
///
/// Blocks are zero-filled before use and re-zeroed when recycled, so a
/// resolved entry always ends at a NUL even before anything is written
/// into reserved space. Entries are never freed individually; the pool
/// releases everything when dropped, and [`PoolStack`](crate::PoolStack)
/// adds scoped bulk release.
pub struct StringPool {
    blocks: Vec<Vec<u8>>,
    standalone: Vec<Vec<u8>>,
    /// Index of the block currently being filled.
    current: usize,
    /// Bytes consumed in the current block.
    used: usize,
    block_size: usize,
}

impl StringPool {
    /// Default block size in kilobytes.
    pub const DEFAULT_BLOCK_KB: usize = 4;
    /// Largest accepted block size in kilobytes; larger requests clamp.
    pub const MAX_BLOCK_KB: usize = 64;

    /// Creates a pool with the default block size.
    pub fn new() -> Self {
        Self::with_block_size(Self::DEFAULT_BLOCK_KB << 10)
    }

    /// Creates a pool whose blocks hold `kb` kilobytes each.
    ///
    /// Requests above [`Self::MAX_BLOCK_KB`] are clamped down to it.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidArgument`] if `kb` is zero.
    pub fn with_block_kb(kb: usize) -> Result<Self, TextError> {
        if kb == 0 {
            return Err(TextError::InvalidArgument {
                reason: "block size must be at least one kilobyte",
            });
        }
        Ok(Self::with_block_size(kb.min(Self::MAX_BLOCK_KB) << 10))
    }

    fn with_block_size(block_size: usize) -> Self {
        Self {
            blocks: vec![vec![0; block_size]],
            standalone: Vec::new(),
            current: 0,
            used: 0,
            block_size,
        }
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of pool blocks allocated so far, standalone entries not
    /// included.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total bytes of backing storage held by the pool.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.len() * self.block_size
            + self.standalone.iter().map(Vec::len).sum::<usize>()
    }

    /// Copies `src` into the pool and returns a handle to it.
    ///
    /// Reserves exactly `src.len()` bytes plus a NUL terminator.
    pub fn add(&mut self, src: &[u8]) -> PoolRef {
        self.insert(src, src.len() + 1)
    }

    /// Copies `src` into the pool, reserving at least `reserve` bytes.
    ///
    /// The reservation lets the entry be extended in place through
    /// [`get_mut`](Self::get_mut) without moving it. When `reserve` is
    /// smaller than `src.len()` the string's own length wins.
    pub fn add_reserved(&mut self, src: &[u8], reserve: usize) -> PoolRef {
        self.insert(src, src.len().max(reserve) + 1)
    }

    /// `size` includes the terminator byte.
    fn insert(&mut self, src: &[u8], size: usize) -> PoolRef {
        if size > self.block_size / 2 {
            let mut block = vec![0; size];
            block[..src.len()].copy_from_slice(src);
            self.standalone.push(block);
            return PoolRef {
                location: PoolLocation::Standalone {
                    index: self.standalone.len() - 1,
                },
                offset: 0,
                cap: size - 1,
            };
        }

        if self.used + size >= self.block_size {
            self.advance();
        }
        let offset = self.used;
        self.blocks[self.current][offset..offset + src.len()].copy_from_slice(src);
        self.used += size;
        PoolRef {
            location: PoolLocation::Block {
                index: self.current,
            },
            offset,
            cap: size - 1,
        }
    }

    /// Moves to the next block, recycling one left over from an earlier
    /// stack release if available.
    fn advance(&mut self) {
        self.current += 1;
        if self.current == self.blocks.len() {
            self.blocks.push(vec![0; self.block_size]);
        } else {
            self.blocks[self.current].fill(0);
        }
        self.used = 0;
    }

    /// Resolves a handle to the stored string.
    ///
    /// The slice ends at the first NUL in the entry's reserved region,
    /// so it tracks in-place edits made through [`get_mut`](Self::get_mut).
    pub fn get(&self, handle: PoolRef) -> &[u8] {
        let region = self.region(handle);
        let end = region
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(handle.cap);
        &region[..end]
    }

    /// Resolves a handle to the entry's full reserved region for
    /// in-place mutation.
    ///
    /// The region is `handle.capacity()` bytes; the NUL terminator
    /// sits just past it and cannot be overwritten through this slice.
    pub fn get_mut(&mut self, handle: PoolRef) -> &mut [u8] {
        match handle.location {
            PoolLocation::Block { index } => {
                &mut self.blocks[index][handle.offset..handle.offset + handle.cap]
            }
            PoolLocation::Standalone { index } => &mut self.standalone[index][..handle.cap],
        }
    }

    /// Reserved region including the terminator byte.
    fn region(&self, handle: PoolRef) -> &[u8] {
        match handle.location {
            PoolLocation::Block { index } => {
                &self.blocks[index][handle.offset..handle.offset + handle.cap + 1]
            }
            PoolLocation::Standalone { index } => &self.standalone[index],
        }
    }

    /// Checkpoint of the current write position, for scoped release.
    pub(crate) fn mark(&self) -> (usize, usize) {
        (self.current, self.used)
    }

    /// Rewinds the write position to a checkpoint, zeroing everything
    /// written since so later resolutions read as empty.
    pub(crate) fn rewind_to(&mut self, block: usize, used: usize) {
        while self.current > block {
            self.blocks[self.current].fill(0);
            self.current -= 1;
        }
        // Bytes past the old cursor in this block are already zero.
        self.blocks[self.current][used..].fill(0);
        self.used = used;
    }
}

impl Default for StringPool {
    fn default() -> Self {
        Self::new()
    }
}
