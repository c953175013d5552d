//! Standard character-set constants.
//!
//! These are the whitespace sets used throughout the workspace, most
//! commonly as trim sets for buffer trim operations and as the
//! line-break set for text readers. They are plain immutable constants
//! — no runtime initialisation, no mutable global state.

/// The empty set.
pub const EMPTY: &[u8] = b"";

/// A single space character.
pub const SPACE: &[u8] = b" ";

/// Whitespace characters that can occur within a single line.
pub const LINESPACE: &[u8] = b" \t";

/// Whitespace characters that cause a new line.
pub const NEWLINE: &[u8] = b"\n\r\x0b\x0c";

/// All whitespace characters.
pub const WHITESPACE: &[u8] = b" \t\n\r\x0b\x0c";
