//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod pack;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::manifest::ManifestFormat;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Texstitch - pack sprite PNGs into a texture atlas
#[derive(Parser)]
#[command(name = "texstitch")]
#[command(about = "Pack a directory of sprite PNGs into a power-of-two texture atlas")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack every PNG in a directory into one atlas image plus a manifest
    Pack {
        /// Directory containing the source sprites (top level only)
        input: PathBuf,

        /// Directory for the atlas image and manifest (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Atlas name; defaults to the input directory's name
        #[arg(short, long)]
        name: Option<String>,

        /// Padding in pixels reserved around every sprite
        #[arg(short, long, default_value = "2")]
        margin: u32,

        /// Manifest format
        #[arg(long, value_enum, default_value_t = ManifestFormat::Lua)]
        format: ManifestFormat,

        /// Suppress packing progress on stderr
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { input, output, name, margin, format, quiet } => {
            pack::run_pack(&input, output.as_deref(), name.as_deref(), margin, format, quiet)
        }
    }
}
