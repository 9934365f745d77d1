//! Codepoints in, glyph records out
//!
//! One rasterize call per codepoint, in input order. Glyphs that fail are
//! logged and recorded in [`Extraction::failures`]; the rest keep flowing.

use std::collections::HashSet;

use crate::{
    error::{GlyphLoadError, GlyphbakeError, Result},
    record::GlyphRecord,
    traits::GlyphRasterizer,
};

/// Everything one extraction pass produced
#[derive(Debug, Default)]
pub struct Extraction {
    /// Successful glyphs in input order
    pub glyphs: Vec<GlyphRecord>,
    /// Recoverable per-glyph failures in input order
    pub failures: Vec<GlyphLoadError>,
}

impl Extraction {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Rasterizes every codepoint with `rasterizer`
///
/// A codepoint that already produced a glyph is not rasterized again: the
/// first good occurrence wins and each later repeat is reported as
/// [`GlyphLoadError::Duplicate`]. A repeat of a failed codepoint is retried
/// and fails on its own terms. Only non-glyph errors abort the pass.
pub fn extract<R>(rasterizer: &mut R, codepoints: &[u32]) -> Result<Extraction>
where
    R: GlyphRasterizer + ?Sized,
{
    let mut extraction = Extraction::default();
    let mut seen = HashSet::with_capacity(codepoints.len());

    log::info!(
        "{}: rasterizing {} codepoints at {}px",
        rasterizer.name(),
        codepoints.len(),
        rasterizer.pixel_size()
    );

    for &codepoint in codepoints {
        if seen.contains(&codepoint) {
            log::warn!("codepoint U+{:x} repeated in input", codepoint);
            extraction.failures.push(GlyphLoadError::Duplicate(codepoint));
            continue;
        }

        let built = rasterizer
            .rasterize(codepoint)
            .and_then(|raw| GlyphRecord::from_raw(&raw));

        match built {
            Ok(record) => {
                log::debug!(
                    "U+{:x}: {}x{} bearing ({}, {}) advance {}",
                    codepoint,
                    record.width,
                    record.height,
                    record.bearing_x,
                    record.bearing_y,
                    record.advance
                );
                seen.insert(codepoint);
                extraction.glyphs.push(record);
            },
            Err(GlyphbakeError::GlyphLoad(err)) => {
                log::warn!("{}", err);
                extraction.failures.push(err);
            },
            Err(other) => return Err(other),
        }
    }

    Ok(extraction)
}
