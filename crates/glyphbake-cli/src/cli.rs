//! CLI argument definitions using Clap v4

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use glyphbake_core::{DEFAULT_FONT, DEFAULT_PIXEL_SIZE};
use glyphbake_export::OutputFormat;

/// Bake font glyphs into an embeddable C header
#[derive(Parser, Debug)]
#[command(name = "glyphbake")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example:\n  glyphbake -o glyph_data.h -c 1F714,1F70D,263F -f Symbola.ttf")]
pub struct Cli {
    /// Output file name (e.g., glyph_data.h)
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Comma-separated Unicode codepoints in hex (e.g., 1F714,1F70D,263F)
    #[arg(short = 'c', long = "codepoints", value_parser = NonEmptyStringValueParser::new())]
    pub codepoints: String,

    /// Font file path (.ttf, .otf, .ttc)
    #[arg(short = 'f', long = "font", default_value = DEFAULT_FONT)]
    pub font: String,

    /// Rasterization size in pixels (em height)
    #[arg(
        short = 's',
        long = "size",
        default_value_t = DEFAULT_PIXEL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=65535)
    )]
    pub size: u32,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value_t = 0)]
    pub face_index: u32,

    /// Output format
    #[arg(short = 'O', long = "format", value_enum, default_value_t = Format::Header)]
    pub format: Format,

    /// Silent mode (no success message)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// C header with static arrays and metrics
    Header,
    /// JSON manifest
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Header => OutputFormat::Header,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["glyphbake", "-o", "g.h", "-c", "1F714"]).unwrap();
        assert_eq!(cli.font, "Symbola.ttf");
        assert_eq!(cli.size, 48);
        assert_eq!(cli.face_index, 0);
        assert_eq!(cli.format, Format::Header);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "glyphbake",
            "--output",
            "g.json",
            "--codepoints",
            "41,42",
            "--font",
            "Other.otf",
            "--size",
            "32",
            "--format",
            "json",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("g.json"));
        assert_eq!(cli.codepoints, "41,42");
        assert_eq!(cli.size, 32);
        assert_eq!(OutputFormat::from(cli.format), OutputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_required_and_invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["glyphbake", "-o", "g.h"]).is_err());
        assert!(Cli::try_parse_from(["glyphbake", "-c", "41"]).is_err());
        assert!(Cli::try_parse_from(["glyphbake", "-o", "g.h", "-c", ""]).is_err());
        assert!(Cli::try_parse_from(["glyphbake", "-o", "g.h", "-c", "41", "-s", "0"]).is_err());
        assert!(Cli::try_parse_from(["glyphbake", "-o", "g.h", "-c", "41", "--bogus"]).is_err());
    }
}
