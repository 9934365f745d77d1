//! Glyphbake Core: codepoints in, embeddable glyph data out
//!
//! A renderer that only needs a handful of symbols should not have to carry a
//! font rasterizer around. This crate holds the pipeline that bakes those
//! symbols ahead of time:
//!
//! 1. **Parsing** - `"1F714,263F"` becomes `[0x1F714, 0x263F]` ([`codepoints`])
//! 2. **Rasterization** - each codepoint becomes a coverage bitmap ([`GlyphRasterizer`])
//! 3. **Record building** - bitmaps are copied out and metrics normalized ([`record`])
//! 4. **Emission** - records become a C header or manifest ([`Emitter`])
//!
//! ```rust,no_run
//! use glyphbake_core::{codepoints::parse_codepoints, pipeline::extract};
//! # use glyphbake_core::{GlyphRasterizer, record::RawGlyph, Result};
//! # struct MyRasterizer;
//! # impl GlyphRasterizer for MyRasterizer {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn pixel_size(&self) -> u32 { 48 }
//! #     fn rasterize(&mut self, _: u32) -> Result<RawGlyph<'_>> { unimplemented!() }
//! # }
//! let parsed = parse_codepoints("1F714, 263F");
//! let mut rasterizer = MyRasterizer;
//! let extraction = extract(&mut rasterizer, parsed.require_any()?)?;
//! for failure in &extraction.failures {
//!     eprintln!("ERROR: {failure}");
//! }
//! # Ok::<(), glyphbake_core::GlyphbakeError>(())
//! ```

use std::path::PathBuf;

pub mod codepoints;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{GlyphbakeError, Result};
pub use record::{GlyphRecord, RawGlyph};
pub use traits::{Emitter, GlyphRasterizer};

/// Font used when none is given
pub const DEFAULT_FONT: &str = "Symbola.ttf";

/// Pixel height used when none is given
pub const DEFAULT_PIXEL_SIZE: u32 = 48;

/// Settings for one run, echoed into the emitted document for provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Where the document goes; its file name also names the include guard
    pub output: PathBuf,
    /// Font path exactly as the user gave it
    pub font_path: String,
    pub pixel_size: u32,
    /// Face within a TTC/OTC collection
    pub face_index: u32,
    /// The codepoint list exactly as the user gave it
    pub codepoint_list: String,
}

impl RunConfig {
    pub fn new(output: impl Into<PathBuf>, codepoint_list: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            font_path: DEFAULT_FONT.to_string(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            face_index: 0,
            codepoint_list: codepoint_list.into(),
        }
    }

    pub fn with_font(mut self, font_path: impl Into<String>) -> Self {
        self.font_path = font_path.into();
        self
    }

    pub fn with_pixel_size(mut self, pixel_size: u32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn with_face_index(mut self, face_index: u32) -> Self {
        self.face_index = face_index;
        self
    }

    /// The name the document is known by: the output's file name
    pub fn output_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_defaults() {
        let run = RunConfig::new("out/glyph_data.h", "1F714");
        assert_eq!(run.font_path, "Symbola.ttf");
        assert_eq!(run.pixel_size, 48);
        assert_eq!(run.face_index, 0);
        assert_eq!(run.output_name(), "glyph_data.h");
    }

    #[test]
    fn test_run_config_builders() {
        let run = RunConfig::new("g.h", "41")
            .with_font("fonts/Other.otf")
            .with_pixel_size(32)
            .with_face_index(2);
        assert_eq!(run.font_path, "fonts/Other.otf");
        assert_eq!(run.pixel_size, 32);
        assert_eq!(run.face_index, 2);
    }
}
