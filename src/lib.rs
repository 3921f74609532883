mod alphabet;
mod config;
mod encoding;
mod errors;
mod raw;

pub use alphabet::Alphabet;
pub use config::{AlphabetConfig, AlphabetsConfig};
pub use encoding::{decode, decode_utf16, encode, encode_utf16};
pub use errors::{DecodeError, EncodeError};
pub use raw::{decode_raw, encode_raw};
