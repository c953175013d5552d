//! Format-string tokenization.

use smallvec::SmallVec;
use strand_core::TextError;

/// What a format piece produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Raw text copied through unchanged.
    Literal,
    /// An integer conversion (`d i c C u x X o`).
    Int,
    /// A floating-point conversion (`f g G e E`).
    Float,
    /// A string conversion (`s`).
    Str,
    /// A pointer conversion (`p`).
    Pointer,
}

/// Parsed rendering options for one conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct ConvSpec {
    pub(crate) left_align: bool,
    pub(crate) plus_sign: bool,
    pub(crate) alt_form: bool,
    pub(crate) space_sign: bool,
    pub(crate) width: Option<usize>,
    pub(crate) precision: Option<usize>,
    /// The conversion character; zero for literal pieces.
    pub(crate) conv: u8,
}

/// One piece of a parsed format string: either a literal byte range or
/// a `%` conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FormatPiece {
    pub(crate) start: usize,
    pub(crate) len: usize,
    pub(crate) kind: PieceKind,
    pub(crate) spec: ConvSpec,
}

const INLINE_PIECES: usize = 16;

/// A format string split into pieces, borrowing its source text.
#[derive(Clone, Debug)]
pub struct FormatString<'a> {
    source: &'a str,
    pieces: SmallVec<[FormatPiece; INLINE_PIECES]>,
}

impl<'a> FormatString<'a> {
    /// Splits `fmt` into literal runs and conversions.
    ///
    /// A conversion is `%` followed by optional flags (`-+# `), width
    /// digits, a `.precision`, an `l` size modifier, and a conversion
    /// character. `%%` parses to a one-byte `%` literal. An unknown
    /// conversion character, or a `%` cut off by the end of the
    /// string, keeps its raw text as a literal piece.
    pub fn parse(fmt: &'a str) -> Self {
        let bytes = fmt.as_bytes();
        let mut pieces = SmallVec::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'%' {
                let run = bytes[i..]
                    .iter()
                    .position(|&b| b == b'%')
                    .unwrap_or(bytes.len() - i);
                pieces.push(FormatPiece {
                    start: i,
                    len: run,
                    kind: PieceKind::Literal,
                    spec: ConvSpec::default(),
                });
                i += run;
                continue;
            }
            if bytes.get(i + 1) == Some(&b'%') {
                // A literal covering only the first '%'.
                pieces.push(FormatPiece {
                    start: i,
                    len: 1,
                    kind: PieceKind::Literal,
                    spec: ConvSpec::default(),
                });
                i += 2;
                continue;
            }
            let (piece, next) = parse_conversion(bytes, i);
            pieces.push(piece);
            i = next;
        }
        Self {
            source: fmt,
            pieces,
        }
    }

    /// The text this format string was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of pieces, literal runs included.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Kind of the piece at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::OutOfRange`] if `index` is past the last
    /// piece.
    pub fn piece_kind(&self, index: usize) -> Result<PieceKind, TextError> {
        self.pieces
            .get(index)
            .map(|p| p.kind)
            .ok_or(TextError::OutOfRange {
                index,
                len: self.pieces.len(),
            })
    }

    pub(crate) fn piece(&self, index: usize) -> Result<&FormatPiece, TextError> {
        self.pieces.get(index).ok_or(TextError::OutOfRange {
            index,
            len: self.pieces.len(),
        })
    }

    /// Raw source text of a piece. For a `%%` literal this is the
    /// single `%` that should be emitted.
    pub(crate) fn piece_text(&self, piece: &FormatPiece) -> &'a [u8] {
        &self.source.as_bytes()[piece.start..piece.start + piece.len]
    }
}

/// Parses one conversion starting at the `%` at `start`. Returns the
/// piece and the index just past it.
fn parse_conversion(bytes: &[u8], start: usize) -> (FormatPiece, usize) {
    let mut spec = ConvSpec::default();
    let mut i = start + 1;

    loop {
        match bytes.get(i) {
            Some(b'-') => spec.left_align = true,
            Some(b'+') => spec.plus_sign = true,
            Some(b'#') => spec.alt_form = true,
            Some(b' ') => spec.space_sign = true,
            _ => break,
        }
        i += 1;
    }
    if let Some(w) = take_digits(bytes, &mut i) {
        spec.width = Some(w);
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        spec.precision = Some(take_digits(bytes, &mut i).unwrap_or(0));
    }
    if bytes.get(i) == Some(&b'l') {
        i += 1;
    }

    let Some(&conv) = bytes.get(i) else {
        // Truncated conversion; keep the raw text.
        return (
            FormatPiece {
                start,
                len: bytes.len() - start,
                kind: PieceKind::Literal,
                spec: ConvSpec::default(),
            },
            bytes.len(),
        );
    };
    i += 1;
    spec.conv = conv;

    let kind = match conv {
        b'd' | b'i' | b'c' | b'C' | b'u' | b'x' | b'X' | b'o' => PieceKind::Int,
        b'f' | b'g' | b'G' | b'e' | b'E' => PieceKind::Float,
        b's' => PieceKind::Str,
        b'p' => PieceKind::Pointer,
        _ => PieceKind::Literal,
    };
    let spec = if kind == PieceKind::Literal {
        ConvSpec::default()
    } else {
        spec
    };
    (
        FormatPiece {
            start,
            len: i - start,
            kind,
            spec,
        },
        i,
    )
}

fn take_digits(bytes: &[u8], i: &mut usize) -> Option<usize> {
    let from = *i;
    let mut value = 0usize;
    while let Some(d) = bytes.get(*i).filter(|b| b.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add((d - b'0') as usize);
        *i += 1;
    }
    (*i > from).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(fmt: &str) -> Vec<PieceKind> {
        let parsed = FormatString::parse(fmt);
        (0..parsed.piece_count())
            .map(|i| parsed.piece_kind(i).unwrap())
            .collect()
    }

    #[test]
    fn plain_text_is_one_literal() {
        let parsed = FormatString::parse("no conversions here");
        assert_eq!(parsed.piece_count(), 1);
        assert_eq!(parsed.piece_kind(0), Ok(PieceKind::Literal));
    }

    #[test]
    fn conversions_split_the_surrounding_text() {
        use PieceKind::*;
        assert_eq!(
            kinds("x=%d, y=%s"),
            vec![Literal, Int, Literal, Str]
        );
    }

    #[test]
    fn conversion_characters_map_to_kinds() {
        use PieceKind::*;
        for c in ["%d", "%i", "%c", "%C", "%u", "%x", "%X", "%o"] {
            assert_eq!(kinds(c), vec![Int], "{c}");
        }
        for c in ["%f", "%g", "%G", "%e", "%E"] {
            assert_eq!(kinds(c), vec![Float], "{c}");
        }
        assert_eq!(kinds("%s"), vec![Str]);
        assert_eq!(kinds("%p"), vec![Pointer]);
    }

    #[test]
    fn unknown_conversion_stays_literal() {
        let parsed = FormatString::parse("%q");
        assert_eq!(parsed.piece_count(), 1);
        assert_eq!(parsed.piece_kind(0), Ok(PieceKind::Literal));
    }

    #[test]
    fn double_percent_is_a_one_byte_literal() {
        let parsed = FormatString::parse("100%%");
        assert_eq!(parsed.piece_count(), 2);
        let piece = parsed.piece(1).unwrap();
        assert_eq!(parsed.piece_text(piece), b"%");
    }

    #[test]
    fn trailing_percent_stays_literal() {
        let parsed = FormatString::parse("oops %");
        assert_eq!(parsed.piece_count(), 2);
        assert_eq!(parsed.piece_kind(1), Ok(PieceKind::Literal));
        let piece = parsed.piece(1).unwrap();
        assert_eq!(parsed.piece_text(piece), b"%");
    }

    #[test]
    fn flags_width_precision_and_size_modifier_parse() {
        let parsed = FormatString::parse("%-+# 12.4ld");
        assert_eq!(parsed.piece_count(), 1);
        let piece = parsed.piece(0).unwrap();
        assert_eq!(piece.kind, PieceKind::Int);
        assert!(piece.spec.left_align);
        assert!(piece.spec.plus_sign);
        assert!(piece.spec.alt_form);
        assert!(piece.spec.space_sign);
        assert_eq!(piece.spec.width, Some(12));
        assert_eq!(piece.spec.precision, Some(4));
        assert_eq!(piece.spec.conv, b'd');
    }

    #[test]
    fn bare_dot_means_zero_precision() {
        let parsed = FormatString::parse("%.f");
        let piece = parsed.piece(0).unwrap();
        assert_eq!(piece.spec.precision, Some(0));
    }

    #[test]
    fn piece_kind_out_of_range() {
        let parsed = FormatString::parse("%d");
        assert_eq!(
            parsed.piece_kind(1),
            Err(TextError::OutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn empty_format_has_no_pieces() {
        let parsed = FormatString::parse("");
        assert_eq!(parsed.piece_count(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pieces_cover_the_source_in_order(fmt in "[a-z%d.+ -]{0,30}") {
                let parsed = FormatString::parse(&fmt);
                let mut at = 0;
                for piece in &parsed.pieces {
                    prop_assert!(piece.start >= at);
                    prop_assert!(piece.start + piece.len <= fmt.len());
                    // A %% piece covers one byte but consumes two.
                    at = piece.start + piece.len;
                }
            }

            #[test]
            fn literal_only_text_round_trips(fmt in "[a-z ]{0,30}") {
                let parsed = FormatString::parse(&fmt);
                if fmt.is_empty() {
                    prop_assert_eq!(parsed.piece_count(), 0);
                } else {
                    prop_assert_eq!(parsed.piece_count(), 1);
                    let piece = parsed.piece(0).unwrap();
                    prop_assert_eq!(parsed.piece_text(piece), fmt.as_bytes());
                }
            }
        }
    }
}
