// this_file: crates/glyphbake-fontdb/tests/lib.rs

use std::path::PathBuf;

use glyphbake_fontdb::Font;

/// Repo test font first, then the usual system DejaVu install
fn test_font_path() -> Option<PathBuf> {
    [
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fonts/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
    ]
    .into_iter()
    .find(|p| p.exists())
}

#[test]
fn test_real_font_maps_latin_and_rejects_nul() {
    let Some(font_path) = test_font_path() else {
        eprintln!("Skipping test: no test font available");
        return;
    };

    let font = Font::from_file(&font_path).expect("load test font");
    assert_eq!(font.face_index(), 0);
    assert!(font.units_per_em() > 0);
    assert!(font.glyph_count().unwrap_or(0) > 0);
    assert!(font.glyph_id('A').is_some(), "Font should contain 'A'");
    assert!(font.glyph_id('\0').is_none(), "NUL should not be mapped");
    assert_eq!(font.source(), font_path.display().to_string());
}

#[test]
fn test_single_font_rejects_nonzero_face() {
    let Some(font_path) = test_font_path() else {
        eprintln!("Skipping test: no test font available");
        return;
    };

    assert!(Font::from_file_index(&font_path, 3).is_err());
}
