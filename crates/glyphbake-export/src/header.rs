//! C header emitter
//!
//! The layout here is a contract: renderers compiled against the header look
//! declarations up by name, and regenerating with the same inputs must not
//! change a single byte.

use std::fmt::Write;

use glyphbake_core::{
    error::{ExportError, Result},
    record::{symbol_name, GlyphRecord, FIELD_SUFFIXES},
    Emitter, RunConfig,
};

/// Byte literals per line in the array bodies
pub const BYTES_PER_LINE: usize = 16;

const INDENT: &str = "    ";

/// Emits `static const` arrays and metrics wrapped in an include guard
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEmitter;

impl HeaderEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the document as text
    pub fn render(&self, run: &RunConfig, glyphs: &[GlyphRecord]) -> Result<String> {
        let guard = guard_name(&run.output_name());
        let mut out = String::new();

        write_document(&mut out, &guard, run, glyphs)
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

        Ok(out)
    }
}

impl Emitter for HeaderEmitter {
    fn name(&self) -> &'static str {
        "header"
    }

    fn emit(&self, run: &RunConfig, glyphs: &[GlyphRecord]) -> Result<Vec<u8>> {
        self.render(run, glyphs).map(String::into_bytes)
    }

    fn extension(&self) -> &'static str {
        "h"
    }
}

fn write_document(
    out: &mut String,
    guard: &str,
    run: &RunConfig,
    glyphs: &[GlyphRecord],
) -> std::fmt::Result {
    writeln!(out, "#ifndef {}", guard)?;
    writeln!(out, "#define {}", guard)?;
    writeln!(out)?;
    writeln!(
        out,
        "// Glyph texture data generated for specified Unicode symbols"
    )?;
    writeln!(
        out,
        "// Font: {}, Size: {} pixels",
        run.font_path, run.pixel_size
    )?;
    writeln!(out, "// Codepoints: {}", run.codepoint_list)?;
    writeln!(out)?;

    for glyph in glyphs {
        write_glyph(out, glyph)?;
    }

    writeln!(out, "#endif // {}", guard)
}

fn write_glyph(out: &mut String, glyph: &GlyphRecord) -> std::fmt::Result {
    let name = symbol_name(glyph.codepoint);

    writeln!(out, "static const unsigned char {}[] = {{", name)?;
    write_bytes(out, &glyph.bitmap)?;
    writeln!(out, "}};")?;

    let values = [
        i64::from(glyph.width),
        i64::from(glyph.height),
        i64::from(glyph.bearing_x),
        i64::from(glyph.bearing_y),
        i64::from(glyph.advance),
    ];
    for (suffix, value) in FIELD_SUFFIXES.iter().zip(values) {
        writeln!(out, "static const int {}_{} = {};", name, suffix, value)?;
    }
    writeln!(out)
}

/// `0x..` literals, comma-separated, a line break after every 16th except the last
fn write_bytes(out: &mut String, bytes: &[u8]) -> std::fmt::Result {
    if bytes.is_empty() {
        return Ok(());
    }

    for (line_no, line) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        if line_no > 0 {
            out.push_str(",\n");
        }
        out.push_str(INDENT);
        for (i, byte) in line.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write!(out, "0x{:02x}", byte)?;
        }
    }
    out.push('\n');
    Ok(())
}

/// Include guard for an output name: `glyph-data.h` becomes `GLYPH_DATA_H`
///
/// Everything outside `[A-Za-z0-9]` turns into `_`; a leading digit gets an
/// extra `_` in front so the result is always a valid identifier.
pub fn guard_name(output_name: &str) -> String {
    let mut guard: String = output_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if guard.is_empty() || guard.starts_with(|c: char| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard
}
