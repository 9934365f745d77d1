//! Error types for glyphbake
//!
//! Two kinds of failure live here. Fatal ones ([`FontLoadError`],
//! [`ExportError`], [`GlyphbakeError::NoValidCodepoints`]) end the run.
//! Per-item ones ([`GlyphLoadError`], [`crate::codepoints::CodepointError`])
//! are collected as diagnostics while the rest of the batch carries on.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlyphbakeError>;

/// Main error type for glyphbake
#[derive(Debug, Error)]
pub enum GlyphbakeError {
    #[error("No valid codepoints provided")]
    NoValidCodepoints,

    #[error(transparent)]
    FontLoad(#[from] FontLoadError),

    #[error(transparent)]
    GlyphLoad(#[from] GlyphLoadError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Failed to load font at {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load font at {0}: invalid font data")]
    InvalidData(String),

    #[error("Failed to load font at {path}: face index {index} out of range")]
    FaceOutOfRange { path: String, index: u32 },
}

/// Per-glyph failures; the run skips the glyph and keeps going
#[derive(Debug, Error)]
pub enum GlyphLoadError {
    #[error("Failed to load Glyph U+{0:x}: not a Unicode scalar value")]
    InvalidCodepoint(u32),

    #[error("Failed to load Glyph U+{0:x}: font has no mapping for this codepoint")]
    Unmapped(u32),

    #[error("Failed to load Glyph U+{codepoint:x}: {reason}")]
    OutlineFailed { codepoint: u32, reason: String },

    #[error("Failed to load Glyph U+{codepoint:x}: bitmap {width}x{height} exceeds rasterizer limit")]
    TooLarge {
        codepoint: u32,
        width: u32,
        height: u32,
    },

    #[error("Failed to load Glyph U+{codepoint:x}: rasterizer produced {actual} bytes, expected {expected}")]
    BitmapSizeMismatch {
        codepoint: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate Glyph U+{0:x} skipped, first occurrence kept")]
    Duplicate(u32),
}

impl GlyphLoadError {
    /// The codepoint this failure belongs to
    pub fn codepoint(&self) -> u32 {
        match self {
            Self::InvalidCodepoint(cp) | Self::Unmapped(cp) | Self::Duplicate(cp) => *cp,
            Self::OutlineFailed { codepoint, .. }
            | Self::TooLarge { codepoint, .. }
            | Self::BitmapSizeMismatch { codepoint, .. } => *codepoint,
        }
    }
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not open {} for writing", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write to {} failed", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Malformed glyph header at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
