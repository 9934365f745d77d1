//! Export module for glyphbake
//!
//! Emitters turn a finished glyph collection into bytes; [`write_output`]
//! puts those bytes on disk.
//!
//! - [`HeaderEmitter`] - the C header renderers compile against
//! - [`JsonEmitter`] - the same data as a JSON manifest
//! - [`reader::read_header`] - loads a generated header back into records

use std::fs::File;
use std::io::Write;
use std::path::Path;

use glyphbake_core::{
    error::{ExportError, Result},
    Emitter,
};

pub mod header;
pub mod json;
pub mod reader;

pub use header::HeaderEmitter;
pub use json::JsonEmitter;

/// The formats the CLI can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Header,
    Json,
}

impl OutputFormat {
    /// Builds the emitter for this format
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            OutputFormat::Header => Box::new(HeaderEmitter::new()),
            OutputFormat::Json => Box::new(JsonEmitter::with_pretty_print()),
        }
    }
}

/// Writes a fully rendered document to `path`
///
/// The document is complete before the file is touched, so the only partial
/// files possible come from an I/O failure mid-write.
pub fn write_output(path: impl AsRef<Path>, document: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let mut file = File::create(path).map_err(|source| ExportError::DestinationUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(document)
        .and_then(|()| file.flush())
        .map_err(|source| ExportError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}
