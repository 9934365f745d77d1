//! Glyph records: the normalized, owned form of one rasterized glyph

use crate::error::{GlyphLoadError, Result};

/// What a rasterizer hands back for one codepoint
///
/// The bitmap is borrowed from the rasterizer's scratch buffer and goes stale
/// on the next rasterize call, so it has to be copied out before then.
#[derive(Debug, Clone, Copy)]
pub struct RawGlyph<'a> {
    pub codepoint: u32,
    /// Row-major coverage, one byte per pixel, rows tightly packed
    pub bitmap: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub bearing_x: i32,
    pub bearing_y: i32,
    /// Horizontal advance in 26.6 fixed point (1/64 pixel)
    pub advance_26_6: i32,
}

/// One glyph, ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub codepoint: u32,
    pub bitmap: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub bearing_x: i32,
    pub bearing_y: i32,
    /// Whole-pixel advance
    pub advance: u32,
}

/// Where a consumer should draw a glyph, and where the pen goes next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub next_pen_x: f32,
}

impl GlyphRecord {
    /// Copies the rasterizer's output into an owned record
    ///
    /// The advance is floored to whole pixels (`>> 6`). A bitmap whose length
    /// disagrees with `width * height` is reported against the glyph instead
    /// of being emitted.
    pub fn from_raw(raw: &RawGlyph<'_>) -> Result<Self> {
        let expected = raw.width as usize * raw.height as usize;
        if raw.bitmap.len() != expected {
            return Err(GlyphLoadError::BitmapSizeMismatch {
                codepoint: raw.codepoint,
                expected,
                actual: raw.bitmap.len(),
            }
            .into());
        }

        Ok(Self {
            codepoint: raw.codepoint,
            bitmap: raw.bitmap.to_vec(),
            width: raw.width,
            height: raw.height,
            bearing_x: raw.bearing_x,
            bearing_y: raw.bearing_y,
            advance: (raw.advance_26_6.max(0) >> 6) as u32,
        })
    }

    /// True for glyphs with no ink, such as the space
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Base identifier of this glyph's declarations, e.g. `glyph_U1f714`
    pub fn symbol(&self) -> String {
        symbol_name(self.codepoint)
    }

    /// Draw origin for a pen at `(pen_x, pen_y)` with y growing upwards
    ///
    /// x = pen + bearingX, y = pen - (height - bearingY), then the pen
    /// moves right by the advance.
    pub fn placement(&self, pen_x: f32, pen_y: f32) -> Placement {
        Placement {
            x: pen_x + self.bearing_x as f32,
            y: pen_y - (self.height as f32 - self.bearing_y as f32),
            next_pen_x: pen_x + self.advance as f32,
        }
    }
}

/// Declaration suffixes, in emission order after the array itself
pub const FIELD_SUFFIXES: [&str; 5] = ["width", "height", "bearingX", "bearingY", "advance"];

/// `glyph_U` + lowercase hex, no padding
pub fn symbol_name(codepoint: u32) -> String {
    format!("glyph_U{:x}", codepoint)
}
