//! Named character encodings
//!
//! Provides [`TextEncoding`], the closed set of charsets fixtures are written
//! in. Both directions are strict: encoding never substitutes or escapes an
//! unrepresentable character and decoding never inserts U+FFFD.

use crate::error::{DecodeError, EncodeError};
use encoding_rs::{Encoding, EncoderResult, GBK, UTF_8};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A fixture charset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// WHATWG GBK (GB2312 superset, no four-byte GB18030 sequences)
    Gbk,
    /// UTF-8 without byte order mark
    Utf8,
}

impl TextEncoding {
    /// Canonical label, as written into fixture text
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gbk => "GBK",
            Self::Utf8 => "UTF-8",
        }
    }

    /// Parse a label, ignoring ASCII case
    ///
    /// # Errors
    /// Returns [`EncodeError::UnknownLabel`] for anything but GBK or UTF-8
    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "gbk" => Ok(Self::Gbk),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            _ => Err(EncodeError::UnknownLabel(label.to_string())),
        }
    }

    #[inline]
    fn codec(self) -> &'static Encoding {
        match self {
            Self::Gbk => GBK,
            Self::Utf8 => UTF_8,
        }
    }

    /// Encode text into this charset
    ///
    /// # Errors
    /// Returns [`EncodeError::Unmappable`] for the first character that has
    /// no representation, with its char offset in `text`
    pub fn encode(self, text: &str) -> Result<Vec<u8>, EncodeError> {
        let mut encoder = self.codec().new_encoder();
        let capacity = encoder
            .max_buffer_length_from_utf8_without_replacement(text.len())
            .unwrap_or(text.len());
        let mut out = Vec::with_capacity(capacity);
        let mut consumed = 0;

        loop {
            let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(
                &text[consumed..],
                &mut out,
                true,
            );
            consumed += read;
            match result {
                EncoderResult::InputEmpty => return Ok(out),
                EncoderResult::OutputFull => out.reserve(text.len() - consumed + 16),
                EncoderResult::Unmappable(character) => {
                    // `consumed` already covers the rejected character
                    let offset = text[..consumed].chars().count().saturating_sub(1);
                    return Err(EncodeError::Unmappable {
                        encoding: self.label(),
                        character,
                        code_point: u32::from(character),
                        offset,
                    });
                }
            }
        }
    }

    /// Decode bytes strictly (no BOM sniffing, no replacement)
    ///
    /// The GBK decoder underneath also accepts GB18030 four-byte sequences;
    /// text that would not encode back to GBK is rejected as malformed.
    ///
    /// # Errors
    /// Returns [`DecodeError::Malformed`] if `bytes` is not valid in this charset
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        let malformed = DecodeError::Malformed {
            encoding: self.label(),
        };
        let text = self
            .codec()
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| malformed.clone())?
            .into_owned();

        if self == Self::Gbk && self.encode(&text).is_err() {
            return Err(malformed);
        }
        Ok(text)
    }
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
