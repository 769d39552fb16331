//! Binary PGM (`P5`) codec for 8-bit grayscale rasters.
//!
//! Header grammar: the tag `P5`, then `width`, `height` and `max_value` as
//! decimal fields separated by whitespace (and optional `#` comments that run
//! to the end of the line), then exactly one whitespace byte, then
//! `width × height` raw samples in row-major order.
//!
//! The payload offset is whatever byte position the parser reached after that
//! single whitespace byte. Samples wider than one byte (`max_value > 255`)
//! are rejected.
use super::{GrayImage, ImageView};
use crate::error::{BlurError, BlurResult};
use std::io::Write;

const FORMAT_TAG: &[u8; 2] = b"P5";

/// Decoded header fields plus the byte offset where samples begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PgmHeader {
    pub width: usize,
    pub height: usize,
    pub max_value: u8,
    pub payload_offset: usize,
}

impl PgmHeader {
    /// Number of payload bytes the header promises.
    pub fn payload_len(&self) -> usize {
        self.width * self.height
    }
}

struct HeaderCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Skip whitespace and comments; returns whether anything was skipped.
    fn skip_separators(&mut self) -> bool {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(c) = self.peek() {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn decimal_field(&mut self, name: &str) -> BlurResult<usize> {
        if !self.skip_separators() {
            return Err(BlurError::MalformedHeader(format!(
                "expected whitespace before {name}"
            )));
        }
        let start = self.pos;
        let mut value = 0usize;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(usize::from(b - b'0')))
                .ok_or_else(|| BlurError::MalformedHeader(format!("{name} is too large")))?;
            self.pos += 1;
        }
        if self.pos == start {
            return Err(BlurError::MalformedHeader(match self.peek() {
                Some(_) => format!("{name} is not a decimal number"),
                None => format!("missing {name}"),
            }));
        }
        Ok(value)
    }
}

/// Parse the textual header and locate the start of the payload.
pub fn parse_header(bytes: &[u8]) -> BlurResult<PgmHeader> {
    if !bytes.starts_with(FORMAT_TAG) {
        return Err(BlurError::MalformedHeader(
            "expected format tag P5".to_string(),
        ));
    }
    let mut cursor = HeaderCursor {
        bytes,
        pos: FORMAT_TAG.len(),
    };
    let width = cursor.decimal_field("width")?;
    let height = cursor.decimal_field("height")?;
    let max_value = cursor.decimal_field("max value")?;

    if width == 0 || height == 0 {
        return Err(BlurError::MalformedHeader(format!(
            "dimensions must be positive (got {width}x{height})"
        )));
    }
    if width.checked_mul(height).is_none() {
        return Err(BlurError::MalformedHeader(format!(
            "dimensions {width}x{height} overflow"
        )));
    }
    let max_value = match u8::try_from(max_value) {
        Ok(v) if v > 0 => v,
        _ => {
            return Err(BlurError::MalformedHeader(format!(
                "max value must be within 1..=255 (got {max_value})"
            )))
        }
    };

    // Exactly one whitespace byte separates the header from the samples.
    match cursor.peek() {
        Some(b) if b.is_ascii_whitespace() => cursor.pos += 1,
        Some(_) => {
            return Err(BlurError::MalformedHeader(
                "expected whitespace after max value".to_string(),
            ))
        }
        None => {}
    }

    Ok(PgmHeader {
        width,
        height,
        max_value,
        payload_offset: cursor.pos,
    })
}

/// Decode a complete `P5` file held in memory. Bytes past the payload are
/// ignored.
pub fn decode(bytes: &[u8]) -> BlurResult<GrayImage> {
    let header = parse_header(bytes)?;
    let expected = header.payload_len();
    let payload = &bytes[header.payload_offset..];
    if payload.len() < expected {
        return Err(BlurError::TruncatedPayload {
            expected,
            actual: payload.len(),
        });
    }
    GrayImage::new(
        header.width,
        header.height,
        header.max_value,
        payload[..expected].to_vec(),
    )
}

/// Serialize header and samples to `out`.
pub fn encode_to<W: Write>(image: &GrayImage, out: &mut W) -> std::io::Result<()> {
    write!(
        out,
        "P5\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.max_value()
    )?;
    out.write_all(image.data())
}

/// Serialize to an in-memory buffer.
pub fn encode(image: &GrayImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.data().len() + 32);
    // Writing into a Vec cannot fail.
    let _ = encode_to(image, &mut out);
    out
}
