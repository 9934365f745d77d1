//! The two seams of the pipeline
//!
//! - [`GlyphRasterizer`] - where codepoints become coverage bitmaps
//! - [`Emitter`] - where glyph records become an embeddable document

use crate::{error::Result, record::GlyphRecord, record::RawGlyph, RunConfig};

/// Turns one codepoint at a time into a bitmap plus placement metrics
///
/// Implementations own whatever engine state they need (parsed font, scratch
/// buffers) and release it when dropped.
///
/// ```ignore
/// struct Blank;
///
/// impl GlyphRasterizer for Blank {
///     fn name(&self) -> &'static str {
///         "blank"
///     }
///
///     fn pixel_size(&self) -> u32 {
///         48
///     }
///
///     fn rasterize(&mut self, codepoint: u32) -> Result<RawGlyph<'_>> {
///         Ok(RawGlyph { codepoint, bitmap: &[], width: 0, height: 0,
///                       bearing_x: 0, bearing_y: 0, advance_26_6: 0 })
///     }
/// }
/// ```
pub trait GlyphRasterizer: Send {
    /// Used in logs
    fn name(&self) -> &'static str;

    /// The pixel height every glyph of this run is rendered at
    fn pixel_size(&self) -> u32;

    /// Rasterize a single codepoint
    ///
    /// The returned bitmap borrows from `self` and is only valid until the
    /// next call.
    fn rasterize(&mut self, codepoint: u32) -> Result<RawGlyph<'_>>;
}

/// Serializes a finished glyph collection
pub trait Emitter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Render the whole document in memory
    fn emit(&self, run: &RunConfig, glyphs: &[GlyphRecord]) -> Result<Vec<u8>>;

    /// Conventional file extension for this format
    fn extension(&self) -> &'static str;
}
