//! Codepoint list parsing
//!
//! Turns `"1F714, 263f , bad,1F70D"` into `[0x1F714, 0x263F, 0x1F70D]` and a
//! diagnostic for `bad`. A single malformed token never sinks the batch.

use thiserror::Error;

use crate::error::{GlyphbakeError, Result};

/// Why a token was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid codepoint format: {token}")]
pub struct CodepointError {
    /// The offending token, whitespace-trimmed
    pub token: String,
}

/// Output of [`parse_codepoints`]: accepted values in input order plus rejects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCodepoints {
    pub codepoints: Vec<u32>,
    pub rejected: Vec<CodepointError>,
}

impl ParsedCodepoints {
    /// The accepted list, or [`GlyphbakeError::NoValidCodepoints`] when nothing survived
    pub fn require_any(&self) -> Result<&[u32]> {
        if self.codepoints.is_empty() {
            Err(GlyphbakeError::NoValidCodepoints)
        } else {
            Ok(&self.codepoints)
        }
    }
}

/// Parses a comma-separated list of hexadecimal codepoints
///
/// Tokens may carry a `0x` or `U+` prefix. A bare token must contain at least
/// one decimal digit, so words like `bad` or `face` are rejected; write
/// `U+FACE` to mean the codepoint. Empty tokens, stray characters and values
/// that overflow `u32` are rejected too. Order and duplicates are kept.
pub fn parse_codepoints(list: &str) -> ParsedCodepoints {
    let mut parsed = ParsedCodepoints::default();

    for raw in list.split(',') {
        let token = raw.trim();
        match parse_token(token) {
            Some(cp) => parsed.codepoints.push(cp),
            None => {
                log::warn!("rejecting codepoint token {:?}", token);
                parsed.rejected.push(CodepointError {
                    token: token.to_string(),
                });
            },
        }
    }

    parsed
}

fn parse_token(token: &str) -> Option<u32> {
    let (digits, prefixed) = match ["0x", "0X", "U+", "u+"]
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix))
    {
        Some(digits) => (digits, true),
        None => (token, false),
    };

    // from_str_radix tolerates a leading '+', which is not a hex digit
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    if !prefixed && !digits.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}
