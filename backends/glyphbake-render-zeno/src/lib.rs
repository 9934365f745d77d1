//! Zeno rasterizer: font outlines to coverage masks, in pure Rust
//!
//! skrifa scales each outline to the configured pixel size, zeno fills it
//! with 256 levels of coverage. The path is built twice in one pass:
//!
//! 1. **SVG path data** for zeno's mask renderer
//! 2. **kurbo path** for the bounding box that sizes the bitmap
//!
//! Bitmaps come out top row first, one byte per pixel, with no row padding.

use kurbo::Shape;
use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    GlyphId, MetadataProvider,
};
use std::path::Path;

use glyphbake_core::{
    error::{GlyphLoadError, GlyphbakeError, Result},
    GlyphRasterizer, RawGlyph, DEFAULT_PIXEL_SIZE,
};
use glyphbake_fontdb::Font;

/// An open font plus everything needed to rasterize from it
///
/// Dropping the session releases the font and the scratch bitmap.
pub struct ZenoRasterizer {
    font: Font,
    pixel_size: u32,
    /// Even 8K displays need boundaries
    max_size: u32,
    /// Reused for every glyph; [`RawGlyph`] borrows from it
    scratch: Vec<u8>,
}

/// Scaled outline of one glyph, before rasterization
struct Outline {
    path_data: String,
    bounds: Option<kurbo::Rect>,
    advance_26_6: i32,
}

impl ZenoRasterizer {
    /// Opens the font at `path` and readies it at the default pixel size
    pub fn open(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        Ok(Self::from_font(Font::from_file_index(path, face_index)?))
    }

    /// Wraps an already loaded font
    pub fn from_font(font: Font) -> Self {
        Self {
            font,
            pixel_size: DEFAULT_PIXEL_SIZE,
            max_size: 65535,
            scratch: Vec::new(),
        }
    }

    /// Fixes the pixel height (ppem) for every glyph that follows
    pub fn configure_size(&mut self, pixel_size: u32) -> Result<()> {
        if pixel_size == 0 || pixel_size > self.max_size {
            return Err(GlyphbakeError::ConfigError(format!(
                "pixel size must be between 1 and {}, got {}",
                self.max_size, pixel_size
            )));
        }
        self.pixel_size = pixel_size;
        Ok(())
    }

    /// Pulls the scaled outline and advance for `codepoint` out of the font
    fn outline(&self, codepoint: u32) -> Result<Outline> {
        let ch = char::from_u32(codepoint).ok_or(GlyphLoadError::InvalidCodepoint(codepoint))?;
        let glyph_id = self
            .font
            .glyph_id(ch)
            .ok_or(GlyphLoadError::Unmapped(codepoint))?;

        let outline_err = |reason: &str| GlyphLoadError::OutlineFailed {
            codepoint,
            reason: reason.to_string(),
        };

        let font_ref = skrifa::FontRef::from_index(self.font.data(), self.font.face_index())
            .map_err(|_| outline_err("font data no longer parses"))?;
        let glyph_id = GlyphId::new(glyph_id);
        let size = Size::new(self.pixel_size as f32);

        let advance = font_ref
            .glyph_metrics(size, LocationRef::default())
            .advance_width(glyph_id)
            .unwrap_or(0.0);

        let glyph = font_ref
            .outline_glyphs()
            .get(glyph_id)
            .ok_or_else(|| outline_err("glyph has no outline"))?;

        let mut builder = ZenoPathBuilder::new();
        glyph
            .draw(DrawSettings::unhinted(size, LocationRef::default()), &mut builder)
            .map_err(|e| outline_err(&format!("outline extraction failed: {}", e)))?;

        let (path_data, kurbo_path) = builder.finish();
        let bounds = if kurbo_path.elements().is_empty() {
            None
        } else {
            Some(kurbo_path.bounding_box()).filter(|b| {
                b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite()
            })
        };

        Ok(Outline {
            path_data,
            bounds,
            advance_26_6: (advance * 64.0).round() as i32,
        })
    }
}

impl GlyphRasterizer for ZenoRasterizer {
    fn name(&self) -> &'static str {
        "zeno"
    }

    fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    fn rasterize(&mut self, codepoint: u32) -> Result<RawGlyph<'_>> {
        use zeno::Mask;

        let outline = self.outline(codepoint)?;

        // Snap the outline box outwards to whole pixels
        let (x0, y0, x1, y1) = match outline.bounds {
            Some(b) => (
                b.x0.floor() as i32,
                b.y0.floor() as i32,
                b.x1.ceil() as i32,
                b.y1.ceil() as i32,
            ),
            None => (0, 0, 0, 0),
        };
        let width = (x1 - x0).max(0) as u32;
        let height = (y1 - y0).max(0) as u32;

        self.scratch.clear();

        // Spaces and other inkless glyphs
        if width == 0 || height == 0 {
            return Ok(RawGlyph {
                codepoint,
                bitmap: &self.scratch,
                width: 0,
                height: 0,
                bearing_x: 0,
                bearing_y: 0,
                advance_26_6: outline.advance_26_6,
            });
        }

        if width > self.max_size || height > self.max_size {
            return Err(GlyphLoadError::TooLarge {
                codepoint,
                width,
                height,
            }
            .into());
        }

        self.scratch.resize(width as usize * height as usize, 0);

        // Pitch is left to zeno's default of `width`: no row padding
        Mask::new(outline.path_data.as_str())
            .size(width, height)
            .offset((-x0, -y0))
            .render_into(&mut self.scratch, None);

        // Font coordinates are y-up, bitmaps are y-down
        flip_rows(&mut self.scratch, width as usize, height as usize);

        Ok(RawGlyph {
            codepoint,
            bitmap: &self.scratch,
            width,
            height,
            bearing_x: x0,
            bearing_y: y1, // Distance from baseline to top edge
            advance_26_6: outline.advance_26_6,
        })
    }
}

impl Drop for ZenoRasterizer {
    fn drop(&mut self) {
        log::debug!("zeno: releasing font session for {}", self.font.source());
    }
}

/// Swaps rows top-for-bottom in place
fn flip_rows(mask: &mut [u8], width: usize, height: usize) {
    for y in 0..(height / 2) {
        let top_row = y * width;
        let bottom_row = (height - 1 - y) * width;
        for x in 0..width {
            mask.swap(top_row + x, bottom_row + x);
        }
    }
}

/// Builds an SVG path for zeno and a kurbo path for bounds in one pass
struct ZenoPathBuilder {
    commands: Vec<String>,
    kurbo_path: kurbo::BezPath,
}

impl ZenoPathBuilder {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
            kurbo_path: kurbo::BezPath::new(),
        }
    }

    fn finish(self) -> (String, kurbo::BezPath) {
        (self.commands.join(" "), self.kurbo_path)
    }
}

impl skrifa::outline::OutlinePen for ZenoPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("M {:.3},{:.3}", x, y));
        self.kurbo_path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("L {:.3},{:.3}", x, y));
        self.kurbo_path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands
            .push(format!("Q {:.3},{:.3} {:.3},{:.3}", cx, cy, x, y));
        self.kurbo_path
            .quad_to((cx as f64, cy as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(format!(
            "C {:.3},{:.3} {:.3},{:.3} {:.3},{:.3}",
            cx0, cy0, cx1, cy1, x, y
        ));
        self.kurbo_path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.commands.push("Z".to_string());
        self.kurbo_path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skrifa::outline::OutlinePen;

    #[test]
    fn test_flip_rows_even_height() {
        let mut mask = vec![1, 1, 2, 2, 3, 3, 4, 4];
        flip_rows(&mut mask, 2, 4);
        assert_eq!(mask, vec![4, 4, 3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn test_flip_rows_odd_height_keeps_middle() {
        let mut mask = vec![1, 2, 3, 4, 5, 6];
        flip_rows(&mut mask, 2, 3);
        assert_eq!(mask, vec![5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_path_builder_tracks_both_paths() {
        let mut builder = ZenoPathBuilder::new();
        builder.move_to(0.0, 0.0);
        builder.line_to(10.0, 0.0);
        builder.quad_to(10.0, 5.0, 5.0, 8.0);
        builder.close();

        let (svg, path) = builder.finish();
        assert_eq!(
            svg,
            "M 0.000,0.000 L 10.000,0.000 Q 10.000,5.000 5.000,8.000 Z"
        );
        let bbox = path.bounding_box();
        assert_eq!(bbox.x0, 0.0);
        assert_eq!(bbox.x1, 10.0);
        assert_eq!(bbox.y1, 8.0);
    }

    #[test]
    fn test_empty_builder_yields_empty_path() {
        let (svg, path) = ZenoPathBuilder::new().finish();
        assert!(svg.is_empty());
        assert!(path.elements().is_empty());
    }
}
