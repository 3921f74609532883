use crate::alphabet::Alphabet;
use crate::errors::{DecodeError, EncodeError};
use crate::raw::{self, SymbolPacker};

/// Encodes text as the Base64 transcription of its UTF-8 byte sequence.
///
/// A `&str` is always a valid code-unit sequence, so this surface cannot
/// fail; [`encode_utf16`] is the fallible counterpart for raw code units.
pub fn encode(text: &str, alphabet: &Alphabet) -> String {
    let mut packer = SymbolPacker::new(alphabet, text.len());
    for c in text.chars() {
        push_codepoint(&mut packer, c as u32);
    }
    packer.finish()
}

/// Encodes a UTF-16 code-unit sequence, combining surrogate pairs.
///
/// # Errors
///
/// Fails on a high surrogate with no following low surrogate, or a low
/// surrogate in leading position. The error carries the offending code
/// unit and its index; nothing is returned on failure.
pub fn encode_utf16(units: &[u16], alphabet: &Alphabet) -> Result<String, EncodeError> {
    let mut packer = SymbolPacker::new(alphabet, units.len() * 3);

    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        match unit {
            0xD800..=0xDBFF => {
                let low = match units.get(i + 1) {
                    Some(&(t @ 0xDC00..=0xDFFF)) => t,
                    _ => return Err(EncodeError::unpaired_high_surrogate(unit, i)),
                };
                let codepoint =
                    ((((unit & 0x3FF) as u32) << 10) | (low & 0x3FF) as u32) + 0x10000;
                push_codepoint(&mut packer, codepoint);
                i += 2;
            }
            0xDC00..=0xDFFF => {
                return Err(EncodeError::unexpected_low_surrogate(unit, i));
            }
            _ => {
                push_codepoint(&mut packer, unit as u32);
                i += 1;
            }
        }
    }

    Ok(packer.finish())
}

/// Expands one code point to its UTF-8 bytes and feeds them to the packer.
fn push_codepoint(packer: &mut SymbolPacker<'_>, codepoint: u32) {
    match codepoint {
        0..=0x7F => {
            packer.push_byte(codepoint as u8);
        }
        0x80..=0x7FF => {
            packer.push_byte(0xC0 | (codepoint >> 6) as u8);
            packer.push_byte(0x80 | (codepoint & 0x3F) as u8);
        }
        0x800..=0xFFFF => {
            packer.push_byte(0xE0 | (codepoint >> 12) as u8);
            packer.push_byte(0x80 | ((codepoint >> 6) & 0x3F) as u8);
            packer.push_byte(0x80 | (codepoint & 0x3F) as u8);
        }
        _ => {
            packer.push_byte(0xF0 | (codepoint >> 18) as u8);
            packer.push_byte(0x80 | ((codepoint >> 12) & 0x3F) as u8);
            packer.push_byte(0x80 | ((codepoint >> 6) & 0x3F) as u8);
            packer.push_byte(0x80 | (codepoint & 0x3F) as u8);
        }
    }
}

/// Decodes a Base64 string back to text.
///
/// # Errors
///
/// Fails on characters outside the alphabet, malformed UTF-8 byte
/// sequences, or decoded code units that do not form valid text. Errors
/// carry the byte offset and the 4-character block of the input that
/// encodes it.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<String, DecodeError> {
    let units = decode_utf16(encoded, alphabet)?;

    let mut out = String::with_capacity(units.len());
    let mut position = 0;
    for item in std::char::decode_utf16(units.iter().copied()) {
        match item {
            Ok(c) => {
                position += c.len_utf16();
                out.push(c);
            }
            Err(e) => {
                return Err(DecodeError::lone_surrogate(e.unpaired_surrogate(), position));
            }
        }
    }

    Ok(out)
}

/// Decodes a Base64 string to UTF-16 code units, splitting
/// supplementary-plane characters into surrogate pairs.
///
/// Unlike [`decode`], the result is returned verbatim even when it
/// contains surrogate code units without a partner.
pub fn decode_utf16(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u16>, DecodeError> {
    let bytes = raw::decode_raw(encoded, alphabet)?;

    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        match lead {
            0x00..=0x7F => {
                units.push(lead as u16);
                i += 1;
            }
            0x80..=0xBF => {
                return Err(DecodeError::stray_continuation(lead, i));
            }
            0xC0..=0xDF => {
                let tail = continuation(&bytes, i, 1)?;
                units.push((((lead & 0x1F) as u16) << 6) | (tail[0] & 0x3F) as u16);
                i += 2;
            }
            0xE0..=0xEF => {
                let tail = continuation(&bytes, i, 2)?;
                units.push(
                    (((lead & 0x0F) as u16) << 12)
                        | (((tail[0] & 0x3F) as u16) << 6)
                        | (tail[1] & 0x3F) as u16,
                );
                i += 3;
            }
            0xF0..=0xFF => {
                let tail = continuation(&bytes, i, 3)?;
                let value = (((lead & 0x07) as u32) << 18)
                    | (((tail[0] & 0x3F) as u32) << 12)
                    | (((tail[1] & 0x3F) as u32) << 6)
                    | (tail[2] & 0x3F) as u32;
                if value < 0x10000 {
                    return Err(DecodeError::overlong_sequence(lead, i));
                }
                let value = value - 0x10000;
                units.push(((value >> 10) as u16) | 0xD800);
                units.push(((value & 0x3FF) as u16) | 0xDC00);
                i += 4;
            }
        }
    }

    Ok(units)
}

/// Returns `count` continuation bytes after the leader at `lead_position`.
fn continuation(bytes: &[u8], lead_position: usize, count: usize) -> Result<&[u8], DecodeError> {
    let start = lead_position + 1;
    if start + count > bytes.len() {
        return Err(DecodeError::truncated_sequence(
            bytes[lead_position],
            lead_position,
        ));
    }
    Ok(&bytes[start..start + count])
}
