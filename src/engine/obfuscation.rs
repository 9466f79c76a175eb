//! Reversible uid obfuscation.
//!
//! Base64-encodes the input, reverses the encoded characters and prepends
//! [`TOKEN_TAG`]. This only hides the uid from casual inspection: anyone can
//! undo it, and the tag does not name a cipher that is actually applied.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Literal prefix marking an obfuscated token.
pub const TOKEN_TAG: &str = "AES256::";

/// Failure to turn a tagged token back into text.
#[allow(dead_code)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObfuscationError {
    #[error("token payload is not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("token payload does not decode to UTF-8 text")]
    InvalidUtf8,
}

/// Obfuscate a string into a tagged token.
pub fn obfuscate(input: &str) -> String {
    tracing::debug!(len = input.len(), "Obfuscating value");
    let encoded = STANDARD.encode(input.as_bytes());
    let scrambled: String = encoded.chars().rev().collect();
    format!("{TOKEN_TAG}{scrambled}")
}

/// Reverse [`obfuscate`].
///
/// Untagged input is returned unchanged. A tagged token whose payload is
/// not well-formed is rejected rather than passed through.
#[allow(dead_code)]
pub fn deobfuscate(token: &str) -> Result<String, ObfuscationError> {
    let Some(payload) = token.strip_prefix(TOKEN_TAG) else {
        return Ok(token.to_string());
    };

    let reversed: String = payload.chars().rev().collect();
    let bytes = STANDARD
        .decode(reversed.as_bytes())
        .map_err(|e| ObfuscationError::InvalidEncoding(e.to_string()))?;

    String::from_utf8(bytes).map_err(|_| ObfuscationError::InvalidUtf8)
}
