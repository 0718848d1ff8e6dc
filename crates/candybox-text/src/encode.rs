//! Byte encodings, Base64 and form-URL encoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::blank::is_blank;
use crate::error::Result;

/// Characters left unescaped by [`url_encode`], besides ASCII alphanumerics.
const FORM_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Text to byte encodings.
///
/// Characters outside `Latin1` or `Ascii` are written as `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
    Ascii,
}

impl TextEncoding {
    pub fn encode(self, value: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => value.as_bytes().to_vec(),
            Self::Utf16Le => value.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf16Be => value.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Latin1 => value.chars().map(|c| u8::try_from(c).unwrap_or(b'?')).collect(),
            Self::Ascii => value
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
        }
    }

    /// Decodes `bytes`, replacing malformed sequences.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Le | Self::Utf16Be => {
                let mut units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| {
                        let pair = [pair[0], pair[1]];
                        if self == Self::Utf16Le {
                            u16::from_le_bytes(pair)
                        } else {
                            u16::from_be_bytes(pair)
                        }
                    })
                    .collect();
                if bytes.len() % 2 == 1 {
                    units.push(0xfffd);
                }
                String::from_utf16_lossy(&units)
            }
            Self::Latin1 => bytes.iter().map(|b| char::from(*b)).collect(),
            Self::Ascii => bytes
                .iter()
                .map(|b| if b.is_ascii() { char::from(*b) } else { '?' })
                .collect(),
        }
    }

    /// Number of bytes `value` occupies in this encoding.
    pub fn byte_count(self, value: &str) -> usize {
        match self {
            Self::Utf8 => value.len(),
            Self::Utf16Le | Self::Utf16Be => value.encode_utf16().count() * 2,
            Self::Latin1 | Self::Ascii => value.chars().count(),
        }
    }
}

/// Encodes `value` in `encoding`, then as standard Base64.
pub fn to_base64_string(value: &str, encoding: TextEncoding) -> String {
    if is_blank(value) {
        return String::new();
    }
    STANDARD.encode(encoding.encode(value))
}

/// Decodes standard Base64, then reads the bytes as `encoding`.
pub fn from_base64_string(value: &str, encoding: TextEncoding) -> Result<String> {
    if is_blank(value) {
        return Ok(String::new());
    }
    let bytes = STANDARD.decode(value.trim()).inspect_err(|err| {
        tracing::debug!(%err, "invalid base64 input");
    })?;
    Ok(encoding.decode(&bytes))
}

/// Form-URL encodes `value`: spaces become `+`, everything outside
/// `A-Za-z0-9-_.!*()` becomes `%XX` over its UTF-8 bytes.
pub fn url_encode(value: &str) -> String {
    if is_blank(value) {
        return String::new();
    }
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM_URL).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Reverses [`url_encode`]. Invalid UTF-8 after unescaping is replaced.
pub fn url_decode(value: &str) -> String {
    if is_blank(value) {
        return String::new();
    }
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
