//! The buffered text reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use strand_buf::StrBuf;
use strand_core::chars::NEWLINE;

/// Reads text from a buffered source into a [`StrBuf`].
///
/// The reader owns its source for its whole lifetime, so there is no
/// open/closed state to track; I/O failures surface as
/// [`std::io::Error`].
pub struct TextReader<R> {
    inner: R,
}

impl TextReader<BufReader<File>> {
    /// Opens the file at `path` for text reading.
    ///
    /// # Errors
    ///
    /// Any error from [`File::open`].
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> TextReader<R> {
    /// Wraps an already-buffered source.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwraps the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads one byte. `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Any error from the underlying source.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    /// Reads up to `n` bytes into `buf`, which is cleared first.
    ///
    /// NUL bytes are filtered out and do not count toward `n`. Returns
    /// the count appended, `None` if the stream was already exhausted,
    /// or `Some(0)` without clearing when `n` is zero.
    ///
    /// # Errors
    ///
    /// Any error from the underlying source.
    pub fn read_chars(&mut self, buf: &mut StrBuf, n: usize) -> io::Result<Option<usize>> {
        if n == 0 {
            return Ok(Some(0));
        }
        buf.clear();
        let mut appended = 0;
        while appended < n {
            match self.read_byte()? {
                None => break,
                Some(0) => {}
                Some(byte) => {
                    buf.append(&[byte]);
                    appended += 1;
                }
            }
        }
        if appended == 0 {
            return Ok(None);
        }
        Ok(Some(appended))
    }

    /// Reads the next non-blank line into `buf`, which is cleared
    /// first.
    ///
    /// Leading newline bytes and NULs are skipped, so blank lines
    /// never come back empty-handed; the line's own terminator is
    /// consumed but not stored. Returns the count appended, or `None`
    /// at end of stream with no line left.
    ///
    /// # Errors
    ///
    /// Any error from the underlying source.
    pub fn read_line(&mut self, buf: &mut StrBuf) -> io::Result<Option<usize>> {
        buf.clear();
        let first = loop {
            match self.read_byte()? {
                None => return Ok(None),
                Some(0) => {}
                Some(byte) if NEWLINE.contains(&byte) => {}
                Some(byte) => break byte,
            }
        };
        buf.append(&[first]);
        let mut appended = 1;
        loop {
            match self.read_byte()? {
                None => break,
                Some(0) => {}
                Some(byte) if NEWLINE.contains(&byte) => break,
                Some(byte) => {
                    buf.append(&[byte]);
                    appended += 1;
                }
            }
        }
        Ok(Some(appended))
    }
}
