//! The generate run: parse, rasterize, emit, write

use anyhow::Result;

use glyphbake_core::{codepoints::parse_codepoints, pipeline::extract, RunConfig};
use glyphbake_export::{write_output, OutputFormat};
use glyphbake_render_zeno::ZenoRasterizer;

use crate::cli::Cli;

/// What a successful run produced
#[derive(Debug)]
pub struct Summary {
    pub glyphs: usize,
    pub skipped: usize,
}

/// Runs the whole pipeline for `cli`
///
/// Recoverable problems are printed as `ERROR:` lines as they are found;
/// the returned error is always fatal.
pub fn run(cli: &Cli) -> Result<Summary> {
    let parsed = parse_codepoints(&cli.codepoints);
    for rejected in &parsed.rejected {
        eprintln!("ERROR: {}", rejected);
    }
    let codepoints = parsed.require_any()?;

    let run = RunConfig::new(&cli.output, cli.codepoints.as_str())
        .with_font(cli.font.as_str())
        .with_pixel_size(cli.size)
        .with_face_index(cli.face_index);

    // The font session lives only for this block; it is released on every
    // path out of it, early `?` returns included
    let extraction = {
        let mut rasterizer = ZenoRasterizer::open(&run.font_path, run.face_index)?;
        rasterizer.configure_size(run.pixel_size)?;
        extract(&mut rasterizer, codepoints)?
    };

    for failure in &extraction.failures {
        eprintln!("ERROR: {}", failure);
    }
    if extraction.glyphs.is_empty() {
        log::warn!("no glyph could be rasterized; writing an empty document");
    }

    let emitter = OutputFormat::from(cli.format).emitter();
    log::debug!("emitting {} glyphs as {}", extraction.glyphs.len(), emitter.name());
    let document = emitter.emit(&run, &extraction.glyphs)?;
    write_output(&run.output, &document)?;

    Ok(Summary {
        glyphs: extraction.glyphs.len(),
        skipped: extraction.failures.len() + parsed.rejected.len(),
    })
}
