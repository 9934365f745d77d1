//! glyphbake - bake font glyphs into embeddable C headers

mod bake;
mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match bake::run(&cli) {
        Ok(summary) => {
            if !cli.quiet {
                println!("Generated {} successfully", cli.output.display());
                if cli.verbose {
                    eprintln!("  Glyphs: {}", summary.glyphs);
                    eprintln!("  Skipped: {}", summary.skipped);
                }
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        },
    }
}
