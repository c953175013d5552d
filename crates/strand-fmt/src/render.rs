//! Argument substitution into a [`StrBuf`].

use strand_buf::StrBuf;
use strand_core::TextError;

use crate::parse::{ConvSpec, FormatString, PieceKind};

/// One positional argument for [`append_formatted`].
///
/// The variant must agree with the kind of the conversion piece that
/// consumes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormatArg<'a> {
    /// For `d i c C u x X o` conversions.
    Int(i64),
    /// For `f g G e E` conversions.
    Float(f64),
    /// For `s` conversions. `None` stands in for a missing string.
    Str(Option<&'a [u8]>),
    /// For `p` conversions.
    Ptr(usize),
}

/// Renders parsed format pieces into a [`StrBuf`].
///
/// The formatter itself only carries the optional string delimiter;
/// everything else lives in the [`FormatString`] and the arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter {
    delimiter: Option<u8>,
}

impl Formatter {
    /// A formatter with no string delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the byte wrapped around rendered strings.
    pub fn set_delimiter(&mut self, delimiter: Option<u8>) {
        self.delimiter = delimiter;
    }

    /// The configured string delimiter, if any.
    pub fn delimiter(&self) -> Option<u8> {
        self.delimiter
    }

    /// Appends the literal piece at `index`.
    ///
    /// # Errors
    ///
    /// [`TextError::OutOfRange`] for a bad index,
    /// [`TextError::InvalidArgument`] if the piece is not a literal.
    pub fn append_literal(
        &self,
        buf: &mut StrBuf,
        fmt: &FormatString<'_>,
        index: usize,
    ) -> Result<usize, TextError> {
        let piece = fmt.piece(index)?;
        if piece.kind != PieceKind::Literal {
            return Err(TextError::InvalidArgument {
                reason: "format piece is not a literal",
            });
        }
        Ok(buf.append(fmt.piece_text(piece)))
    }

    /// Appends the integer conversion at `index` rendered with `value`.
    ///
    /// # Errors
    ///
    /// [`TextError::OutOfRange`] for a bad index,
    /// [`TextError::InvalidArgument`] if the piece is not an integer
    /// conversion.
    pub fn append_int(
        &self,
        buf: &mut StrBuf,
        fmt: &FormatString<'_>,
        index: usize,
        value: i64,
    ) -> Result<usize, TextError> {
        let piece = fmt.piece(index)?;
        if piece.kind != PieceKind::Int {
            return Err(TextError::InvalidArgument {
                reason: "format piece does not take an integer",
            });
        }
        let body = render_int(value, &piece.spec);
        Ok(append_padded(buf, body.as_bytes(), &piece.spec))
    }

    /// Appends the float conversion at `index` rendered with `value`.
    ///
    /// # Errors
    ///
    /// [`TextError::OutOfRange`] for a bad index,
    /// [`TextError::InvalidArgument`] if the piece is not a float
    /// conversion.
    pub fn append_float(
        &self,
        buf: &mut StrBuf,
        fmt: &FormatString<'_>,
        index: usize,
        value: f64,
    ) -> Result<usize, TextError> {
        let piece = fmt.piece(index)?;
        if piece.kind != PieceKind::Float {
            return Err(TextError::InvalidArgument {
                reason: "format piece does not take a float",
            });
        }
        let body = render_float(value, &piece.spec);
        Ok(append_padded(buf, body.as_bytes(), &piece.spec))
    }

    /// Appends the string conversion at `index` rendered with `value`.
    ///
    /// With a delimiter configured the string is wrapped in it, and a
    /// `None` value renders as `NULL`; without one, `None` appends
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`TextError::OutOfRange`] for a bad index,
    /// [`TextError::InvalidArgument`] if the piece is not a string
    /// conversion.
    pub fn append_str(
        &self,
        buf: &mut StrBuf,
        fmt: &FormatString<'_>,
        index: usize,
        value: Option<&[u8]>,
    ) -> Result<usize, TextError> {
        let piece = fmt.piece(index)?;
        if piece.kind != PieceKind::Str {
            return Err(TextError::InvalidArgument {
                reason: "format piece does not take a string",
            });
        }
        let mut body = Vec::new();
        match (value, self.delimiter) {
            (Some(s), delim) => {
                let cut = piece.spec.precision.map_or(s.len(), |p| p.min(s.len()));
                if let Some(d) = delim {
                    body.push(d);
                    body.extend_from_slice(&s[..cut]);
                    body.push(d);
                } else {
                    body.extend_from_slice(&s[..cut]);
                }
            }
            (None, Some(_)) => body.extend_from_slice(b"NULL"),
            (None, None) => {}
        }
        Ok(append_padded(buf, &body, &piece.spec))
    }

    /// Appends the pointer conversion at `index` rendered with `addr`.
    ///
    /// # Errors
    ///
    /// [`TextError::OutOfRange`] for a bad index,
    /// [`TextError::InvalidArgument`] if the piece is not a pointer
    /// conversion.
    pub fn append_pointer(
        &self,
        buf: &mut StrBuf,
        fmt: &FormatString<'_>,
        index: usize,
        addr: usize,
    ) -> Result<usize, TextError> {
        let piece = fmt.piece(index)?;
        if piece.kind != PieceKind::Pointer {
            return Err(TextError::InvalidArgument {
                reason: "format piece does not take a pointer",
            });
        }
        let body = format!("{addr:#x}");
        Ok(append_padded(buf, body.as_bytes(), &piece.spec))
    }

    /// Renders every piece in order, consuming one argument per
    /// conversion, and returns the total bytes appended.
    ///
    /// Surplus arguments are ignored, as a printf would ignore them.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidArgument`] if a conversion runs out of
    /// arguments or its argument has the wrong variant.
    pub fn append_formatted(
        &self,
        buf: &mut StrBuf,
        fmt: &FormatString<'_>,
        args: &[FormatArg<'_>],
    ) -> Result<usize, TextError> {
        let mut appended = 0;
        let mut next_arg = 0;
        for index in 0..fmt.piece_count() {
            let kind = fmt.piece_kind(index)?;
            if kind == PieceKind::Literal {
                appended += self.append_literal(buf, fmt, index)?;
                continue;
            }
            let arg = args.get(next_arg).ok_or(TextError::InvalidArgument {
                reason: "not enough arguments for format string",
            })?;
            next_arg += 1;
            appended += match (kind, arg) {
                (PieceKind::Int, FormatArg::Int(v)) => self.append_int(buf, fmt, index, *v)?,
                (PieceKind::Float, FormatArg::Float(v)) => {
                    self.append_float(buf, fmt, index, *v)?
                }
                (PieceKind::Str, FormatArg::Str(v)) => self.append_str(buf, fmt, index, *v)?,
                (PieceKind::Pointer, FormatArg::Ptr(v)) => {
                    self.append_pointer(buf, fmt, index, *v)?
                }
                _ => {
                    return Err(TextError::InvalidArgument {
                        reason: "argument variant does not match conversion",
                    })
                }
            };
        }
        Ok(appended)
    }
}

/// Formats with a default (delimiter-less) [`Formatter`]. See
/// [`Formatter::append_formatted`].
///
/// # Errors
///
/// As for [`Formatter::append_formatted`].
pub fn append_formatted(
    buf: &mut StrBuf,
    fmt: &FormatString<'_>,
    args: &[FormatArg<'_>],
) -> Result<usize, TextError> {
    Formatter::new().append_formatted(buf, fmt, args)
}

fn render_int(value: i64, spec: &ConvSpec) -> String {
    let mut body = match spec.conv {
        b'x' => {
            if spec.alt_form {
                format!("{value:#x}")
            } else {
                format!("{value:x}")
            }
        }
        b'X' => {
            if spec.alt_form {
                format!("{value:#X}")
            } else {
                format!("{value:X}")
            }
        }
        b'o' => {
            if spec.alt_form {
                format!("{value:#o}")
            } else {
                format!("{value:o}")
            }
        }
        b'c' | b'C' => return ((value as u8) as char).to_string(),
        _ => {
            if spec.plus_sign {
                format!("{value:+}")
            } else {
                value.to_string()
            }
        }
    };
    if spec.space_sign && !body.starts_with(['-', '+']) {
        body.insert(0, ' ');
    }
    if let Some(p) = spec.precision {
        body = zero_extend(body, p);
    }
    body
}

fn render_float(value: f64, spec: &ConvSpec) -> String {
    match spec.conv {
        b'e' | b'E' => {
            let body = match spec.precision {
                Some(p) if spec.plus_sign => format!("{value:+.p$e}"),
                Some(p) => format!("{value:.p$e}"),
                None if spec.plus_sign => format!("{value:+e}"),
                None => format!("{value:e}"),
            };
            if spec.conv == b'E' {
                body.replace('e', "E")
            } else {
                body
            }
        }
        b'g' | b'G' => {
            if spec.plus_sign {
                format!("{value:+}")
            } else {
                value.to_string()
            }
        }
        _ => {
            let p = spec.precision.unwrap_or(6);
            if spec.plus_sign {
                format!("{value:+.p$}")
            } else {
                format!("{value:.p$}")
            }
        }
    }
}

/// Zero-pads the digits of a rendered integer to at least `min` of
/// them, keeping any sign or space prefix in front.
fn zero_extend(body: String, min: usize) -> String {
    let sign_len = body
        .find(|c: char| c != '-' && c != '+' && c != ' ')
        .unwrap_or(body.len());
    let digits = body.len() - sign_len;
    if digits >= min {
        return body;
    }
    let mut out = String::with_capacity(sign_len + min);
    out.push_str(&body[..sign_len]);
    for _ in digits..min {
        out.push('0');
    }
    out.push_str(&body[sign_len..]);
    out
}

/// Appends `body` padded with spaces to the piece's field width.
fn append_padded(buf: &mut StrBuf, body: &[u8], spec: &ConvSpec) -> usize {
    let pad = spec.width.map_or(0, |w| w.saturating_sub(body.len()));
    if pad == 0 {
        return buf.append(body);
    }
    let mut appended = 0;
    if spec.left_align {
        appended += buf.append(body);
        appended += buf.append(&vec![b' '; pad]);
    } else {
        appended += buf.append(&vec![b' '; pad]);
        appended += buf.append(body);
    }
    appended
}
