//! The growable string buffer.

use std::cmp::Ordering;
use std::fmt;

use strand_core::{scan, TextError};

/// A mutable, dynamically grown byte-string buffer.
///
/// The backing storage always holds a NUL terminator at `storage[len]`,
/// so `capacity` counts content bytes only — the allocation is
/// `capacity + 1` bytes. Every mutating operation may reallocate; no
/// raw storage reference escapes the type, so nothing can dangle.
///
/// Storage grows in aligned steps: a buffer created from a source
/// sequence is sized to the next multiple-of-64 boundary (minus the
/// terminator) with a floor of 127, and later growth doubles the
/// capacity and rounds to the next multiple-of-16 boundary. Callers
/// that know a string will grow large should create it with
/// [`StrBuf::with_capacity`] up front.
#[derive(Clone)]
pub struct StrBuf {
    /// Backing storage, always `cap + 1` bytes, `data[len] == 0`.
    data: Vec<u8>,
    /// Content length, excluding the terminator.
    len: usize,
    /// Content capacity, excluding the terminator.
    cap: usize,
}

/// Default capacity of an empty buffer.
const INITIAL_CAPACITY: usize = 127;

/// Alignment step for initial sizing from a source sequence.
const INITIAL_ALIGN: usize = 64;

/// Alignment step for doubling growth.
const GROWTH_ALIGN: usize = 16;

/// Rounds an initial capacity up to the next multiple of
/// [`INITIAL_ALIGN`] minus one, with a floor of [`INITIAL_CAPACITY`].
fn initial_capacity(wanted: usize) -> usize {
    if wanted < INITIAL_CAPACITY {
        INITIAL_CAPACITY
    } else {
        wanted + INITIAL_ALIGN - (wanted % INITIAL_ALIGN) - 1
    }
}

impl StrBuf {
    /// Creates a new empty buffer with the default capacity.
    pub fn new() -> Self {
        Self {
            data: vec![0; INITIAL_CAPACITY + 1],
            len: 0,
            cap: INITIAL_CAPACITY,
        }
    }

    /// Creates a new empty buffer with the given content capacity.
    ///
    /// Fails with [`TextError::InvalidArgument`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, TextError> {
        if capacity == 0 {
            return Err(TextError::InvalidArgument {
                reason: "capacity must be at least 1",
            });
        }
        Ok(Self {
            data: vec![0; capacity + 1],
            len: 0,
            cap: capacity,
        })
    }

    /// Creates a new buffer copied from the source sequence.
    pub fn from_bytes(src: &[u8]) -> Self {
        let cap = initial_capacity(src.len());
        let mut data = vec![0; cap + 1];
        data[..src.len()].copy_from_slice(src);
        Self {
            data,
            len: src.len(),
            cap,
        }
    }

    /// Creates a new buffer copied from the source sequence, with the
    /// given content capacity.
    ///
    /// Fails with [`TextError::InvalidArgument`] if `capacity` is 0 or
    /// smaller than the source length.
    pub fn from_bytes_with_capacity(src: &[u8], capacity: usize) -> Result<Self, TextError> {
        if capacity == 0 || capacity < src.len() {
            return Err(TextError::InvalidArgument {
                reason: "capacity must be at least 1 and hold the source",
            });
        }
        let mut data = vec![0; capacity + 1];
        data[..src.len()].copy_from_slice(src);
        Ok(Self {
            data,
            len: src.len(),
            cap: capacity,
        })
    }

    /// Content length in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current content capacity in bytes, excluding the terminator.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The buffer content, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The byte at the given position.
    ///
    /// Fails with [`TextError::OutOfRange`] if `pos >= len`.
    pub fn byte_at(&self, pos: usize) -> Result<u8, TextError> {
        if pos >= self.len {
            return Err(TextError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        Ok(self.data[pos])
    }

    /// Position of the first occurrence of the given byte.
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == byte)
    }

    /// Position of the first occurrence of the given sub-sequence.
    ///
    /// An empty needle is found at position 0.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > self.len {
            return None;
        }
        self.as_bytes()
            .windows(needle.len())
            .position(|w| w == needle)
    }

    /// Position of the last occurrence of the given byte.
    pub fn rfind_byte(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().rposition(|&b| b == byte)
    }

    /// Lexicographic comparison against a byte sequence.
    pub fn compare(&self, other: &[u8]) -> Ordering {
        self.as_bytes().cmp(other)
    }

    /// Grows storage so `wanted` content bytes fit without another
    /// reallocation.
    ///
    /// Doubling policy: the new capacity is `max(2 × capacity, wanted)`
    /// rounded up to the next multiple of 16 minus one. A no-op when
    /// the current capacity already suffices, so repeated calls with
    /// the same `wanted` reallocate at most once.
    pub fn ensure_capacity(&mut self, wanted: usize) {
        if wanted <= self.cap {
            return;
        }
        let mut new_cap = (self.cap * 2).max(wanted);
        new_cap += GROWTH_ALIGN - (new_cap % GROWTH_ALIGN) - 1;
        let mut data = vec![0; new_cap + 1];
        data[..=self.len].copy_from_slice(&self.data[..=self.len]);
        self.data = data;
        self.cap = new_cap;
    }

    /// Replaces the content with the source sequence.
    ///
    /// Returns the new length.
    pub fn set(&mut self, src: &[u8]) -> usize {
        self.ensure_capacity(src.len());
        self.data[..src.len()].copy_from_slice(src);
        self.data[src.len()] = 0;
        self.len = src.len();
        self.len
    }

    /// Appends one byte.
    ///
    /// Returns the number of bytes appended (always 1). Fails with
    /// [`TextError::InvalidArgument`] for the NUL terminator byte.
    pub fn push(&mut self, byte: u8) -> Result<usize, TextError> {
        if byte == 0 {
            return Err(TextError::InvalidArgument {
                reason: "cannot append the NUL terminator byte",
            });
        }
        self.ensure_capacity(self.len + 1);
        self.data[self.len] = byte;
        self.len += 1;
        self.data[self.len] = 0;
        Ok(1)
    }

    /// Appends the source sequence.
    ///
    /// Returns the number of bytes appended; an empty source appends
    /// nothing.
    pub fn append(&mut self, src: &[u8]) -> usize {
        if src.is_empty() {
            return 0;
        }
        self.ensure_capacity(self.len + src.len());
        self.data[self.len..self.len + src.len()].copy_from_slice(src);
        self.len += src.len();
        self.data[self.len] = 0;
        src.len()
    }

    /// Appends up to `count` bytes of the source, starting at `start`.
    ///
    /// The range is clamped to the source: a `start` at or past the end
    /// appends nothing, and `count` is reduced to what remains. Returns
    /// the number of bytes actually appended.
    pub fn append_range(&mut self, src: &[u8], start: usize, count: usize) -> usize {
        if start >= src.len() {
            return 0;
        }
        let count = count.min(src.len() - start);
        self.append(&src[start..start + count])
    }

    /// Inserts one byte at the given position.
    ///
    /// `pos` may be anywhere in `0..=len`. Fails with
    /// [`TextError::OutOfRange`] outside that interval and with
    /// [`TextError::InvalidArgument`] for the NUL terminator byte.
    pub fn insert_byte(&mut self, pos: usize, byte: u8) -> Result<usize, TextError> {
        if byte == 0 {
            return Err(TextError::InvalidArgument {
                reason: "cannot insert the NUL terminator byte",
            });
        }
        if pos > self.len {
            return Err(TextError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        self.ensure_capacity(self.len + 1);
        // Shift the tail (terminator included) one byte right.
        self.data.copy_within(pos..=self.len, pos + 1);
        self.data[pos] = byte;
        self.len += 1;
        Ok(1)
    }

    /// Inserts the source sequence at the given position.
    ///
    /// Returns the number of bytes inserted; an empty source inserts
    /// nothing. Fails with [`TextError::OutOfRange`] if `pos > len`.
    pub fn insert(&mut self, pos: usize, src: &[u8]) -> Result<usize, TextError> {
        if pos > self.len {
            return Err(TextError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        if src.is_empty() {
            return Ok(0);
        }
        self.ensure_capacity(self.len + src.len());
        self.data.copy_within(pos..=self.len, pos + src.len());
        self.data[pos..pos + src.len()].copy_from_slice(src);
        self.len += src.len();
        Ok(src.len())
    }

    /// Inserts up to `count` bytes of the source, starting at `start`,
    /// at position `pos`.
    ///
    /// The source range is clamped as in [`StrBuf::append_range`].
    /// Returns the number of bytes actually inserted. Fails with
    /// [`TextError::OutOfRange`] if `pos > len`.
    pub fn insert_range(
        &mut self,
        pos: usize,
        src: &[u8],
        start: usize,
        count: usize,
    ) -> Result<usize, TextError> {
        if pos > self.len {
            return Err(TextError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        if start >= src.len() {
            return Ok(0);
        }
        let count = count.min(src.len() - start);
        self.insert(pos, &src[start..start + count])
    }

    /// Removes the byte at the given position.
    ///
    /// Returns the number of bytes removed (always 1). Fails with
    /// [`TextError::OutOfRange`] if `pos >= len`.
    pub fn delete_at(&mut self, pos: usize) -> Result<usize, TextError> {
        if pos >= self.len {
            return Err(TextError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        self.data.copy_within(pos + 1..=self.len, pos);
        self.len -= 1;
        Ok(1)
    }

    /// Removes the bytes between `start` and `end`, inclusive.
    ///
    /// An empty range (`end <= start`) is a no-op returning 0. Fails
    /// with [`TextError::OutOfRange`] when a non-empty range reaches
    /// past the end of the buffer.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<usize, TextError> {
        if end <= start {
            return Ok(0);
        }
        if end >= self.len {
            return Err(TextError::OutOfRange {
                index: end,
                len: self.len,
            });
        }
        let count = end - start + 1;
        self.data.copy_within(end + 1..=self.len, start);
        self.len -= count;
        Ok(count)
    }

    /// Clears all content.
    ///
    /// Returns the prior length. Capacity is retained.
    pub fn clear(&mut self) -> usize {
        let prior = self.len;
        self.data[0] = 0;
        self.len = 0;
        prior
    }

    /// Removes the leading run of bytes found in `trim_set`.
    ///
    /// Returns the number of bytes removed. An empty set removes
    /// nothing.
    pub fn trim_left(&mut self, trim_set: &[u8]) -> usize {
        let n = scan::skip_set(self.as_bytes(), trim_set);
        if n > 0 {
            self.data.copy_within(n..=self.len, 0);
            self.len -= n;
        }
        n
    }

    /// Removes the trailing run of bytes found in `trim_set`.
    ///
    /// Returns the number of bytes removed.
    pub fn trim_right(&mut self, trim_set: &[u8]) -> usize {
        let kept = self.as_bytes()
            .iter()
            .rposition(|b| !trim_set.contains(b))
            .map_or(0, |i| i + 1);
        let n = self.len - kept;
        if n > 0 {
            self.len = kept;
            self.data[self.len] = 0;
        }
        n
    }

    /// Removes leading and trailing runs of bytes found in `trim_set`.
    ///
    /// Returns the total number of bytes removed.
    pub fn trim(&mut self, trim_set: &[u8]) -> usize {
        let trimmed = self.trim_right(trim_set);
        trimmed + self.trim_left(trim_set)
    }

    /// Converts ASCII content to upper-case in place.
    ///
    /// Returns the number of bytes changed.
    pub fn to_upper(&mut self) -> usize {
        scan::to_upper(&mut self.data[..self.len])
    }

    /// Converts ASCII content to lower-case in place.
    ///
    /// Returns the number of bytes changed.
    pub fn to_lower(&mut self) -> usize {
        scan::to_lower(&mut self.data[..self.len])
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[u8]> for StrBuf {
    fn from(src: &[u8]) -> Self {
        Self::from_bytes(src)
    }
}

impl From<&str> for StrBuf {
    fn from(src: &str) -> Self {
        Self::from_bytes(src.as_bytes())
    }
}

impl PartialEq for StrBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StrBuf {}

impl PartialEq<&[u8]> for StrBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<&str> for StrBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for StrBuf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StrBuf {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StrBuf({:?}, len={}, cap={})",
            String::from_utf8_lossy(self.as_bytes()),
            self.len,
            self.cap
        )
    }
}
