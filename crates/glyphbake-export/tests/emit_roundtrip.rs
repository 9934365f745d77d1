// this_file: crates/glyphbake-export/tests/emit_roundtrip.rs

use glyphbake_core::{Emitter, GlyphRecord, RunConfig};
use glyphbake_export::{reader::read_header, HeaderEmitter};
use proptest::prelude::*;

fn glyph(codepoint: u32, width: u32, height: u32, seed: u8) -> GlyphRecord {
    GlyphRecord {
        codepoint,
        bitmap: (0..width * height)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect(),
        width,
        height,
        bearing_x: seed as i32 - 3,
        bearing_y: height as i32 - 4,
        advance: width + 2,
    }
}

fn run() -> RunConfig {
    RunConfig::new("AlchemicalGlyphs.h", "1F714,1F70D,263F").with_font("Symbola.ttf")
}

#[test]
fn same_input_same_bytes() {
    let glyphs = vec![
        glyph(0x1F714, 30, 31, 1),
        glyph(0x1F70D, 28, 40, 2),
        glyph(0x20, 0, 0, 0),
    ];

    let first = HeaderEmitter::new().emit(&run(), &glyphs).unwrap();
    let second = HeaderEmitter::new().emit(&run(), &glyphs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn header_reads_back_to_the_same_records() {
    let glyphs = vec![
        glyph(0x1F714, 30, 31, 1),
        glyph(0x263F, 17, 1, 9),
        glyph(0x20, 0, 0, 0),
        glyph(0x41, 16, 2, 200),
    ];

    let text = HeaderEmitter::new().render(&run(), &glyphs).unwrap();
    assert_eq!(read_header(&text).unwrap(), glyphs);
}

#[test]
fn array_holds_exactly_width_times_height_literals() {
    let text = HeaderEmitter::new()
        .render(&run(), &[glyph(0x1F714, 13, 7, 5)])
        .unwrap();
    let body_start = text.find("[] = {\n").unwrap() + "[] = {\n".len();
    let body_end = text[body_start..].find("};").unwrap() + body_start;
    assert_eq!(text[body_start..body_end].matches("0x").count(), 13 * 7);
}

proptest! {
    #[test]
    fn prop_bitmaps_survive_emission(
        width in 0u32..40,
        height in 0u32..40,
        seed in any::<u8>(),
        codepoint in 0u32..0x11_0000,
    ) {
        let record = glyph(codepoint, width, height, seed);
        let text = HeaderEmitter::new().render(&run(), std::slice::from_ref(&record)).unwrap();
        let decoded = read_header(&text).unwrap();
        prop_assert_eq!(decoded, vec![record]);
    }
}
