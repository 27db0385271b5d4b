//! Transport encoding of file content.
//!
//! The contents API ships file bodies as base64, wrapped at 60 columns on the
//! way out and accepted unwrapped on the way in.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Encodes text for a contents write.
pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes a base64 payload into UTF-8 text, ignoring embedded whitespace.
///
/// `path` is only used to label errors.
pub fn decode_content(path: &str, encoded: &str) -> Result<String> {
    let compact: String = encoded.split_ascii_whitespace().collect();

    let bytes = STANDARD.decode(compact).map_err(|e| Error::Decode {
        path: path.to_string(),
        message: format!("invalid base64: {e}"),
    })?;

    String::from_utf8(bytes).map_err(|e| Error::Decode {
        path: path.to_string(),
        message: format!("content is not valid UTF-8: {e}"),
    })
}
