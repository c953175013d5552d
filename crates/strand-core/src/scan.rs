//! Byte scanning helpers.
//!
//! Two families of free functions over byte slices:
//!
//! - `skip_*` advance past a leading run of passable bytes and return
//!   the index of the first byte that does not qualify.
//! - `seek_*` advance until a reachable byte is found and return its
//!   index.
//!
//! Both families return `s.len()` when the whole slice qualifies (or,
//! for `seek_*`, when nothing matches). The `_limit` variants stop
//! after examining at most `max` bytes. Range bounds are inclusive;
//! reversed bounds fail with [`TextError::InvalidArgument`].

use crate::error::TextError;

/// Validates a set of inclusive byte ranges.
fn check_ranges(ranges: &[(u8, u8)]) -> Result<(), TextError> {
    for &(first, last) in ranges {
        if first > last {
            return Err(TextError::InvalidArgument {
                reason: "range bounds are reversed",
            });
        }
    }
    Ok(())
}

/// Skips a leading run of the given byte.
pub fn skip_byte(s: &[u8], pass: u8) -> usize {
    s.iter().position(|&b| b != pass).unwrap_or(s.len())
}

/// Skips a leading run of the given byte, examining at most `max` bytes.
pub fn skip_byte_limit(s: &[u8], pass: u8, max: usize) -> usize {
    let end = max.min(s.len());
    skip_byte(&s[..end], pass)
}

/// Skips a leading run of bytes found in `set`.
pub fn skip_set(s: &[u8], set: &[u8]) -> usize {
    s.iter()
        .position(|b| !set.contains(b))
        .unwrap_or(s.len())
}

/// Skips a leading run of bytes found in `set`, examining at most
/// `max` bytes.
pub fn skip_set_limit(s: &[u8], set: &[u8], max: usize) -> usize {
    let end = max.min(s.len());
    skip_set(&s[..end], set)
}

/// Skips a leading run of bytes within the inclusive range
/// `first..=last`.
pub fn skip_range(s: &[u8], first: u8, last: u8) -> Result<usize, TextError> {
    skip_ranges(s, &[(first, last)])
}

/// Skips a leading run of bytes within `first..=last`, examining at
/// most `max` bytes.
pub fn skip_range_limit(s: &[u8], first: u8, last: u8, max: usize) -> Result<usize, TextError> {
    skip_ranges_limit(s, &[(first, last)], max)
}

/// Skips a leading run of bytes that fall in any of the given
/// inclusive ranges. An empty range list skips nothing.
pub fn skip_ranges(s: &[u8], ranges: &[(u8, u8)]) -> Result<usize, TextError> {
    check_ranges(ranges)?;
    Ok(s.iter()
        .position(|&b| !ranges.iter().any(|&(lo, hi)| b >= lo && b <= hi))
        .unwrap_or(s.len()))
}

/// Skips a leading run of bytes that fall in any of the given
/// inclusive ranges, examining at most `max` bytes.
pub fn skip_ranges_limit(s: &[u8], ranges: &[(u8, u8)], max: usize) -> Result<usize, TextError> {
    let end = max.min(s.len());
    skip_ranges(&s[..end], ranges)
}

/// Seeks the first occurrence of the given byte.
pub fn seek_byte(s: &[u8], reach: u8) -> usize {
    s.iter().position(|&b| b == reach).unwrap_or(s.len())
}

/// Seeks the first occurrence of any byte found in `set`.
pub fn seek_set(s: &[u8], set: &[u8]) -> usize {
    s.iter()
        .position(|b| set.contains(b))
        .unwrap_or(s.len())
}

/// Seeks the first byte within the inclusive range `first..=last`.
pub fn seek_range(s: &[u8], first: u8, last: u8) -> Result<usize, TextError> {
    seek_ranges(s, &[(first, last)])
}

/// Seeks the first byte that falls in any of the given inclusive
/// ranges. An empty range list seeks past the whole slice.
pub fn seek_ranges(s: &[u8], ranges: &[(u8, u8)]) -> Result<usize, TextError> {
    check_ranges(ranges)?;
    Ok(s.iter()
        .position(|&b| ranges.iter().any(|&(lo, hi)| b >= lo && b <= hi))
        .unwrap_or(s.len()))
}

/// Converts ASCII lower-case bytes to upper-case in place.
///
/// Returns the number of bytes changed.
pub fn to_upper(s: &mut [u8]) -> usize {
    let mut changed = 0;
    for b in s.iter_mut() {
        if b.is_ascii_lowercase() {
            *b = b.to_ascii_uppercase();
            changed += 1;
        }
    }
    changed
}

/// Converts ASCII upper-case bytes to lower-case in place.
///
/// Returns the number of bytes changed.
pub fn to_lower(s: &mut [u8]) -> usize {
    let mut changed = 0;
    for b in s.iter_mut() {
        if b.is_ascii_uppercase() {
            *b = b.to_ascii_lowercase();
            changed += 1;
        }
    }
    changed
}
