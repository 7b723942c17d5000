//! Strict UTF-8 scalar decoding for byte-slice inputs.
//!
//! The recognizer accepts `&[u8]` rather than `&str` so that malformed
//! encoding can surface at match time and collapse into the uniform
//! "no match" outcome. The decoder is strict: overlong forms, surrogate
//! code points, and out-of-range values are all rejected rather than
//! mapped to a replacement character.
//!
//! Strictness is also what makes the ASCII byte-comparison fast path in
//! [`Literal::match_prefix`](crate::Literal::match_prefix) exactly
//! equivalent to the decode loop: every scalar value has exactly one
//! accepted encoding, so scalar-by-scalar equality implies byte equality.

/// Decode one Unicode scalar value from the front of `bytes`.
///
/// Returns the scalar and the number of bytes it occupies (1..=4).
/// Returns `None` when `bytes` is empty or does not begin with a
/// well-formed UTF-8 sequence: a bad leading byte, a missing or invalid
/// continuation byte, an overlong form, a surrogate code point, or a
/// value above U+10FFFF.
pub(crate) fn decode_char(bytes: &[u8]) -> Option<(char, u32)> {
    let first = *bytes.first()?;
    match first {
        // ASCII: one byte, no continuation.
        0x00..=0x7F => Some((char::from(first), 1)),
        // Two-byte sequence: U+0080..=U+07FF.
        0xC0..=0xDF => {
            let b1 = continuation(bytes, 1)?;
            let value = (u32::from(first & 0x1F) << 6) | b1;
            if value < 0x80 {
                return None; // overlong (0xC0/0xC1 leading bytes)
            }
            char::from_u32(value).map(|c| (c, 2))
        }
        // Three-byte sequence: U+0800..=U+FFFF minus surrogates.
        0xE0..=0xEF => {
            let b1 = continuation(bytes, 1)?;
            let b2 = continuation(bytes, 2)?;
            let value = (u32::from(first & 0x0F) << 12) | (b1 << 6) | b2;
            if value < 0x800 {
                return None; // overlong
            }
            // char::from_u32 rejects surrogates U+D800..=U+DFFF.
            char::from_u32(value).map(|c| (c, 3))
        }
        // Four-byte sequence: U+10000..=U+10FFFF.
        0xF0..=0xF7 => {
            let b1 = continuation(bytes, 1)?;
            let b2 = continuation(bytes, 2)?;
            let b3 = continuation(bytes, 3)?;
            let value = (u32::from(first & 0x07) << 18) | (b1 << 12) | (b2 << 6) | b3;
            if value < 0x1_0000 {
                return None; // overlong
            }
            // char::from_u32 rejects values above U+10FFFF.
            char::from_u32(value).map(|c| (c, 4))
        }
        // Bare continuation bytes (0x80..=0xBF) and bytes that can never
        // appear in UTF-8 (0xF8..=0xFF).
        _ => None,
    }
}

/// Read the continuation byte at `index`, returning its 6 payload bits.
///
/// Returns `None` if the byte is missing or not of the form `0b10xx_xxxx`.
#[inline]
fn continuation(bytes: &[u8], index: usize) -> Option<u32> {
    let b = *bytes.get(index)?;
    if b & 0xC0 == 0x80 {
        Some(u32::from(b & 0x3F))
    } else {
        None
    }
}
