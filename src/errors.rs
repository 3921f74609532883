use std::fmt;

/// Errors that can occur while encoding a UTF-16 code-unit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A high surrogate not followed by a low surrogate
    UnpairedHighSurrogate { unit: u16, position: usize },
    /// A low surrogate with no preceding high surrogate
    UnexpectedLowSurrogate { unit: u16, position: usize },
}

impl EncodeError {
    pub fn unpaired_high_surrogate(unit: u16, position: usize) -> Self {
        EncodeError::UnpairedHighSurrogate { unit, position }
    }

    pub fn unexpected_low_surrogate(unit: u16, position: usize) -> Self {
        EncodeError::UnexpectedLowSurrogate { unit, position }
    }

    /// The offending code unit value.
    pub fn unit(&self) -> u16 {
        match self {
            EncodeError::UnpairedHighSurrogate { unit, .. } => *unit,
            EncodeError::UnexpectedLowSurrogate { unit, .. } => *unit,
        }
    }

    /// Index of the offending code unit in the input.
    pub fn position(&self) -> usize {
        match self {
            EncodeError::UnpairedHighSurrogate { position, .. } => *position,
            EncodeError::UnexpectedLowSurrogate { position, .. } => *position,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        let (label, unit, position) = match self {
            EncodeError::UnpairedHighSurrogate { unit, position } => {
                ("unpaired high surrogate", unit, position)
            }
            EncodeError::UnexpectedLowSurrogate { unit, position } => {
                ("unexpected low surrogate", unit, position)
            }
        };

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m {} 0x{:04X} at position {}",
                label, unit, position
            )?;
        } else {
            writeln!(f, "error: {} 0x{:04X} at position {}", label, unit, position)?;
        }
        writeln!(f)?;

        let hint = "a code unit in 0xD800-0xDBFF must be immediately followed by one in 0xDC00-0xDFFF";
        if use_color {
            write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
        } else {
            write!(f, "hint: {}", hint)
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors that can occur while decoding a Base64 string back to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    InvalidSymbol { symbol: char, position: usize },
    /// A continuation byte appeared in leader position
    StrayContinuation {
        byte: u8,
        position: usize,
        block_start: usize,
    },
    /// A leader declared more continuation bytes than the stream supplies
    TruncatedSequence {
        byte: u8,
        position: usize,
        block_start: usize,
    },
    /// A four-byte sequence whose value falls below the supplementary planes
    OverlongSequence {
        byte: u8,
        position: usize,
        block_start: usize,
    },
    /// The decoded code units contain a surrogate with no partner
    LoneSurrogate { unit: u16, position: usize },
}

impl DecodeError {
    pub fn invalid_symbol(symbol: char, position: usize) -> Self {
        DecodeError::InvalidSymbol { symbol, position }
    }

    pub fn stray_continuation(byte: u8, position: usize) -> Self {
        DecodeError::StrayContinuation {
            byte,
            position,
            block_start: block_of(position),
        }
    }

    pub fn truncated_sequence(byte: u8, position: usize) -> Self {
        DecodeError::TruncatedSequence {
            byte,
            position,
            block_start: block_of(position),
        }
    }

    pub fn overlong_sequence(byte: u8, position: usize) -> Self {
        DecodeError::OverlongSequence {
            byte,
            position,
            block_start: block_of(position),
        }
    }

    pub fn lone_surrogate(unit: u16, position: usize) -> Self {
        DecodeError::LoneSurrogate { unit, position }
    }

    /// The 4-character block of the encoded string containing the fault,
    /// as a `[start, end)` range. `None` for faults not tied to a block.
    pub fn block(&self) -> Option<(usize, usize)> {
        match self {
            DecodeError::StrayContinuation { block_start, .. }
            | DecodeError::TruncatedSequence { block_start, .. }
            | DecodeError::OverlongSequence { block_start, .. } => {
                Some((*block_start, *block_start + 4))
            }
            _ => None,
        }
    }
}

/// Start of the 4-character block that encodes the byte at `byte_position`.
/// Three source bytes map onto each block of four symbols.
fn block_of(byte_position: usize) -> usize {
    (byte_position / 3) * 4
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidSymbol { symbol, position } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid symbol '{}' at position {}",
                        symbol, position
                    )?;
                } else {
                    writeln!(f, "error: invalid symbol '{}' at position {}", symbol, position)?;
                }
                writeln!(f)?;
                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m the input is not in this Base64 alphabet")
                } else {
                    write!(f, "hint: the input is not in this Base64 alphabet")
                }
            }
            DecodeError::StrayContinuation {
                byte,
                position,
                block_start,
            } => {
                write_byte_fault(
                    f,
                    use_color,
                    "continuation byte in leader position",
                    *byte,
                    *position,
                    *block_start,
                    "a byte with top bits 10 is only valid after a multi-byte leader",
                )
            }
            DecodeError::TruncatedSequence {
                byte,
                position,
                block_start,
            } => {
                write_byte_fault(
                    f,
                    use_color,
                    "truncated multi-byte sequence",
                    *byte,
                    *position,
                    *block_start,
                    "the leader declares more continuation bytes than the input supplies",
                )
            }
            DecodeError::OverlongSequence {
                byte,
                position,
                block_start,
            } => {
                write_byte_fault(
                    f,
                    use_color,
                    "overlong four-byte sequence",
                    *byte,
                    *position,
                    *block_start,
                    "a four-byte sequence must encode a supplementary-plane character",
                )
            }
            DecodeError::LoneSurrogate { unit, position } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m decoded text contains lone surrogate 0x{:04X} at code unit {}",
                        unit, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: decoded text contains lone surrogate 0x{:04X} at code unit {}",
                        unit, position
                    )?;
                }
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m decode the input with decode_utf16 to inspect the raw code units"
                    )
                } else {
                    write!(
                        f,
                        "hint: decode the input with decode_utf16 to inspect the raw code units"
                    )
                }
            }
        }
    }
}

fn write_byte_fault(
    f: &mut fmt::Formatter<'_>,
    use_color: bool,
    label: &str,
    byte: u8,
    position: usize,
    block_start: usize,
    hint: &str,
) -> fmt::Result {
    if use_color {
        writeln!(
            f,
            "\x1b[1;31merror:\x1b[0m {}: byte 0x{:02X} at offset {}",
            label, byte, position
        )?;
    } else {
        writeln!(f, "error: {}: byte 0x{:02X} at offset {}", label, byte, position)?;
    }
    writeln!(f)?;
    writeln!(
        f,
        "  encoded in block at characters [{}, {})",
        block_start,
        block_start + 4
    )?;
    writeln!(f)?;
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_accessors() {
        let err = EncodeError::unpaired_high_surrogate(0xD800, 3);
        assert_eq!(err.unit(), 0xD800);
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::unpaired_high_surrogate(0xD800, 0);
        let display = format!("{}", err);

        assert!(display.contains("unpaired high surrogate 0xD800 at position 0"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_decode_error_block_alignment() {
        // Bytes 0..3 live in block [0, 4), bytes 3..6 in block [4, 8)
        assert_eq!(DecodeError::truncated_sequence(0xC3, 0).block(), Some((0, 4)));
        assert_eq!(DecodeError::truncated_sequence(0xC3, 2).block(), Some((0, 4)));
        assert_eq!(DecodeError::truncated_sequence(0xC3, 3).block(), Some((4, 8)));
        assert_eq!(DecodeError::stray_continuation(0x80, 7).block(), Some((8, 12)));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::truncated_sequence(0xC3, 3);
        let display = format!("{}", err);

        assert!(display.contains("truncated multi-byte sequence"));
        assert!(display.contains("0xC3"));
        assert!(display.contains("[4, 8)"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_invalid_symbol_has_no_block() {
        let err = DecodeError::invalid_symbol('!', 5);
        assert_eq!(err.block(), None);
    }
}
