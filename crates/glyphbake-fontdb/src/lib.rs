//! Where fonts come off the disk
//!
//! A [`Font`] owns the raw bytes of one font file plus the face index to use
//! inside it. Parsing happens on demand through `read-fonts`, so nothing
//! borrows from the buffer for longer than a single lookup.
//!
//! Loading validates the data up front: a font that opens here will parse
//! again later, and a broken file fails once, at the start of the run.

use std::fs;
use std::path::Path;

use read_fonts::{FileRef, FontRef as ReadFontRef, TableProvider};

use glyphbake_core::error::{FontLoadError, Result};

/// A font file in memory, pinned to one face
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    source: String,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let source = path.as_ref().display().to_string();
        let data = fs::read(path.as_ref()).map_err(|e| FontLoadError::FileNotFound {
            path: source.clone(),
            source: e,
        })?;

        let font = Self::from_data_named(data, face_index, source)?;
        log::info!(
            "loaded {} (face {}, {} units/em)",
            font.source,
            font.face_index,
            font.units_per_em
        );
        Ok(font)
    }

    /// Turns raw font bytes into a specific face
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        Self::from_data_named(data, face_index, "<memory>".to_string())
    }

    fn from_data_named(data: Vec<u8>, face_index: u32, source: String) -> Result<Self> {
        // Collections parse fine as files; the face index is what can be wrong
        if let Ok(FileRef::Collection(collection)) = FileRef::new(&data) {
            if face_index >= collection.len() {
                return Err(FontLoadError::FaceOutOfRange {
                    path: source,
                    index: face_index,
                }
                .into());
            }
        }

        let font_ref = ReadFontRef::from_index(&data, face_index)
            .map_err(|_| FontLoadError::InvalidData(source.clone()))?;

        // A font without a cmap cannot map a single codepoint
        if font_ref.cmap().is_err() {
            return Err(FontLoadError::InvalidData(source).into());
        }

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            data,
            face_index,
            units_per_em,
            source,
        })
    }

    /// Raw font bytes as they live in the file
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Where this font came from, for messages
    pub fn source(&self) -> &str {
        &self.source
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Finds which glyph draws this character
    ///
    /// A mapping to glyph 0 (`.notdef`) counts as no mapping.
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch))
            .map(|gid| gid.to_u32())
            .filter(|&gid| gid != 0)
    }

    /// Counts how many different glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("source", &self.source)
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .field("len", &self.data.len())
            .finish()
    }
}
