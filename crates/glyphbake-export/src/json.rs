//! JSON manifest emitter
//!
//! Same glyphs, same names, as a document tools can load without a C parser.

use serde::{Deserialize, Serialize};

use glyphbake_core::{
    error::{ExportError, Result},
    record::GlyphRecord,
    Emitter, RunConfig,
};

/// Manifest exporter for glyph collections
///
/// # Examples
///
/// ```ignore
/// use glyphbake_export::JsonEmitter;
///
/// let json = JsonEmitter::with_pretty_print().emit(&run, &glyphs)?;
/// println!("{}", String::from_utf8_lossy(&json));
/// ```
pub struct JsonEmitter {
    /// Whether to pretty-print the JSON
    pretty: bool,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty_print() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level manifest document
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub font: String,
    pub pixel_size: u32,
    pub codepoints: String,
    pub glyphs: Vec<ManifestGlyph>,
}

/// One glyph entry; field names follow the header's declaration suffixes
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestGlyph {
    pub name: String,
    pub codepoint: u32,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "bearingX")]
    pub bearing_x: i32,
    #[serde(rename = "bearingY")]
    pub bearing_y: i32,
    pub advance: u32,
    pub bitmap: Vec<u8>,
}

impl From<&GlyphRecord> for ManifestGlyph {
    fn from(glyph: &GlyphRecord) -> Self {
        Self {
            name: glyph.symbol(),
            codepoint: glyph.codepoint,
            width: glyph.width,
            height: glyph.height,
            bearing_x: glyph.bearing_x,
            bearing_y: glyph.bearing_y,
            advance: glyph.advance,
            bitmap: glyph.bitmap.clone(),
        }
    }
}

impl Emitter for JsonEmitter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn emit(&self, run: &RunConfig, glyphs: &[GlyphRecord]) -> Result<Vec<u8>> {
        let manifest = Manifest {
            font: run.font_path.clone(),
            pixel_size: run.pixel_size,
            codepoints: run.codepoint_list.clone(),
            glyphs: glyphs.iter().map(ManifestGlyph::from).collect(),
        };

        let mut json = if self.pretty {
            serde_json::to_vec_pretty(&manifest)
        } else {
            serde_json::to_vec(&manifest)
        }
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        json.push(b'\n');

        Ok(json)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_uses_header_names() {
        let glyph = GlyphRecord {
            codepoint: 0x1F714,
            bitmap: vec![1, 2],
            width: 2,
            height: 1,
            bearing_x: 3,
            bearing_y: 4,
            advance: 5,
        };
        let run = RunConfig::new("glyphs.json", "1F714");
        let bytes = JsonEmitter::new().emit(&run, &[glyph]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["font"], "Symbola.ttf");
        assert_eq!(value["pixel_size"], 48);
        assert_eq!(value["glyphs"][0]["name"], "glyph_U1f714");
        assert_eq!(value["glyphs"][0]["bearingX"], 3);
        assert_eq!(value["glyphs"][0]["bitmap"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_manifest_parses_back() {
        let run = RunConfig::new("glyphs.json", "20");
        let glyph = GlyphRecord {
            codepoint: 0x20,
            bitmap: Vec::new(),
            width: 0,
            height: 0,
            bearing_x: 0,
            bearing_y: 0,
            advance: 12,
        };
        let bytes = JsonEmitter::with_pretty_print()
            .emit(&run, std::slice::from_ref(&glyph))
            .unwrap();
        let manifest: Manifest = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(manifest.glyphs, vec![ManifestGlyph::from(&glyph)]);
        assert_eq!(manifest.codepoints, "20");
    }
}
