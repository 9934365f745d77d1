//! Reading a generated header back
//!
//! This is the consumer's side of the format: find each `glyph_U<hex>` array,
//! attach its five metrics by name, and decode the byte literals. Useful for
//! checking a generated file or loading one without a C compiler.

use glyphbake_core::{
    error::{ExportError, Result},
    record::{symbol_name, GlyphRecord, FIELD_SUFFIXES},
};

const ARRAY_PREFIX: &str = "static const unsigned char ";
const SCALAR_PREFIX: &str = "static const int ";

/// A glyph under construction; metrics arrive after the array
struct Pending {
    record: GlyphRecord,
    seen: [bool; FIELD_SUFFIXES.len()],
}

/// Parses every glyph declared in `text`, in declaration order
///
/// Each array must be followed by all five metrics and contain exactly
/// `width * height` bytes.
pub fn read_header(text: &str) -> Result<Vec<GlyphRecord>> {
    let mut glyphs: Vec<Pending> = Vec::new();
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    while let Some((line_no, line)) = lines.next() {
        let malformed = |reason: String| ExportError::Malformed {
            line: line_no,
            reason,
        };

        if let Some(rest) = line.strip_prefix(ARRAY_PREFIX) {
            let name = rest
                .strip_suffix("[] = {")
                .ok_or_else(|| malformed(format!("unexpected array declaration `{}`", line)))?;
            let codepoint = parse_symbol(name).ok_or_else(|| malformed(format!("bad glyph name `{}`", name)))?;

            let mut bitmap = Vec::new();
            loop {
                let (body_no, body) = lines
                    .next()
                    .ok_or_else(|| malformed(format!("array `{}` is never closed", name)))?;
                if body == "};" {
                    break;
                }
                for literal in body.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    bitmap.push(parse_byte(literal).ok_or_else(|| ExportError::Malformed {
                        line: body_no,
                        reason: format!("bad byte literal `{}`", literal),
                    })?);
                }
            }

            glyphs.push(Pending {
                record: GlyphRecord {
                    codepoint,
                    bitmap,
                    width: 0,
                    height: 0,
                    bearing_x: 0,
                    bearing_y: 0,
                    advance: 0,
                },
                seen: [false; FIELD_SUFFIXES.len()],
            });
        } else if let Some(rest) = line.strip_prefix(SCALAR_PREFIX) {
            let (name, value) = rest
                .strip_suffix(';')
                .and_then(|decl| decl.split_once(" = "))
                .ok_or_else(|| malformed(format!("unexpected scalar declaration `{}`", line)))?;
            let (base, field) = name
                .rsplit_once('_')
                .ok_or_else(|| malformed(format!("bad metric name `{}`", name)))?;
            let value: i64 = value
                .parse()
                .map_err(|_| malformed(format!("bad value for `{}`", name)))?;

            let pending = glyphs
                .last_mut()
                .filter(|p| symbol_name(p.record.codepoint) == base)
                .ok_or_else(|| malformed(format!("`{}` does not follow its array", name)))?;

            let slot = FIELD_SUFFIXES
                .iter()
                .position(|suffix| *suffix == field)
                .ok_or_else(|| malformed(format!("unknown metric `{}`", field)))?;
            if pending.seen[slot] {
                return Err(malformed(format!("`{}` declared twice", name)).into());
            }
            pending.seen[slot] = true;

            let record = &mut pending.record;
            let out_of_range = || malformed(format!("value of `{}` out of range", name));
            match slot {
                0 => record.width = u32::try_from(value).map_err(|_| out_of_range())?,
                1 => record.height = u32::try_from(value).map_err(|_| out_of_range())?,
                2 => record.bearing_x = i32::try_from(value).map_err(|_| out_of_range())?,
                3 => record.bearing_y = i32::try_from(value).map_err(|_| out_of_range())?,
                _ => record.advance = u32::try_from(value).map_err(|_| out_of_range())?,
            }
        }
    }

    glyphs
        .into_iter()
        .map(|pending| {
            let name = symbol_name(pending.record.codepoint);
            if pending.seen.iter().any(|seen| !seen) {
                return Err(ExportError::Malformed {
                    line: 0,
                    reason: format!("`{}` is missing metrics", name),
                }
                .into());
            }
            let expected = pending.record.width as usize * pending.record.height as usize;
            if pending.record.bitmap.len() != expected {
                return Err(ExportError::Malformed {
                    line: 0,
                    reason: format!(
                        "`{}` holds {} bytes, expected {}",
                        name,
                        pending.record.bitmap.len(),
                        expected
                    ),
                }
                .into());
            }
            Ok(pending.record)
        })
        .collect()
}

/// `glyph_U1f714` to `0x1F714`
fn parse_symbol(name: &str) -> Option<u32> {
    let hex = name.strip_prefix("glyph_U")?;
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn parse_byte(literal: &str) -> Option<u8> {
    let hex = literal.strip_prefix("0x")?;
    if hex.len() != 2 {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}
