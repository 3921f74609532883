use crate::alphabet::Alphabet;
use crate::errors::DecodeError;

/// Repacks 8-bit bytes into 6-bit alphabet symbols.
///
/// Between whole bytes the buffer holds 0, 2 or 4 pending bits; `finish`
/// flushes a left-shifted final symbol and pads to a 4-symbol boundary.
pub(crate) struct SymbolPacker<'a> {
    alphabet: &'a Alphabet,
    out: String,
    symbols: usize,
    bit_buffer: u32,
    bits_in_buffer: usize,
}

impl<'a> SymbolPacker<'a> {
    pub(crate) fn new(alphabet: &'a Alphabet, byte_hint: usize) -> Self {
        SymbolPacker {
            alphabet,
            out: String::with_capacity(byte_hint.div_ceil(3) * 4),
            symbols: 0,
            bit_buffer: 0,
            bits_in_buffer: 0,
        }
    }

    pub(crate) fn push_byte(&mut self, byte: u8) {
        self.bit_buffer = (self.bit_buffer << 8) | byte as u32;
        self.bits_in_buffer += 8;

        while self.bits_in_buffer >= 6 {
            self.bits_in_buffer -= 6;
            let digit = ((self.bit_buffer >> self.bits_in_buffer) & 0x3F) as u8;
            self.out.push(self.alphabet.symbol(digit));
            self.symbols += 1;
        }
    }

    pub(crate) fn finish(mut self) -> String {
        if self.bits_in_buffer > 0 {
            let digit = ((self.bit_buffer << (6 - self.bits_in_buffer)) & 0x3F) as u8;
            self.out.push(self.alphabet.symbol(digit));
            self.symbols += 1;
        }

        while self.symbols % 4 != 0 {
            self.out.push(self.alphabet.padding());
            self.symbols += 1;
        }

        self.out
    }
}

/// Encodes raw bytes as Base64 without any character-set interpretation.
pub fn encode_raw(data: &[u8], alphabet: &Alphabet) -> String {
    let mut packer = SymbolPacker::new(alphabet, data.len());
    for &byte in data {
        packer.push_byte(byte);
    }
    packer.finish()
}

/// Decodes a Base64 string to its raw byte stream.
///
/// Decoding stops at the first padding character; 0, 1 or 2 trailing
/// padding characters are accepted.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSymbol`] for characters outside the
/// alphabet.
pub fn decode_raw(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(encoded.len() / 4 * 3);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for (position, c) in encoded.chars().enumerate() {
        if c == alphabet.padding() {
            break;
        }

        let digit = alphabet
            .digit(c)
            .ok_or_else(|| DecodeError::invalid_symbol(c, position))?;

        bit_buffer = (bit_buffer << 6) | digit as u32;
        bits_in_buffer += 6;

        while bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            out.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    Ok(out)
}
