//! The `pack` subcommand - load, pack, compose, emit

use std::path::Path;
use std::process::ExitCode;

use crate::cli::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::compositor::compose;
use crate::loader::load_sprites;
use crate::manifest::{self, ManifestFormat};
use crate::output::{atlas_paths, save_manifest, save_png};
use crate::pack::pack;
use crate::telemetry::{ConsoleObserver, NullObserver, PackObserver};

/// Execute the pack command
pub(crate) fn run_pack(
    input: &Path,
    output: Option<&Path>,
    name: Option<&str>,
    margin: u32,
    format: ManifestFormat,
    quiet: bool,
) -> ExitCode {
    if !input.is_dir() {
        eprintln!("Error: input '{}' is not a directory", input.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let atlas_name = match name {
        Some(n) => n.to_string(),
        None => match input.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => {
                eprintln!(
                    "Error: cannot derive an atlas name from '{}'; pass --name",
                    input.display()
                );
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
    };

    let loaded = load_sprites(input);
    for failure in &loaded.failures {
        eprintln!("Warning: skipped '{}': {}", failure.path.display(), failure.reason);
    }
    if loaded.sprites.is_empty() {
        eprintln!(
            "Warning: no sprites loaded from '{}'; writing an empty atlas",
            input.display()
        );
    }

    let observer: Box<dyn PackObserver> =
        if quiet { Box::new(NullObserver) } else { Box::new(ConsoleObserver) };

    let atlas = match pack(&loaded.sprites, margin, observer.as_ref()) {
        Ok(atlas) => atlas,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let canvas = compose(&loaded.sprites, &atlas);
    let manifest_text = match manifest::render(&atlas, &atlas_name, format) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot render manifest: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let out_dir = output.unwrap_or(Path::new("."));
    let (image_path, manifest_path) = atlas_paths(out_dir, &atlas_name, format);

    // Independent writes; join on both before reporting success
    let (image_result, manifest_result) = rayon::join(
        || save_png(&canvas, &image_path),
        || save_manifest(&manifest_text, &manifest_path),
    );

    if let Err(e) = image_result {
        eprintln!("Error: failed to save '{}': {}", image_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    if let Err(e) = manifest_result {
        eprintln!("Error: failed to save '{}': {}", manifest_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", image_path.display());
    println!("Saved: {}", manifest_path.display());
    ExitCode::from(EXIT_SUCCESS)
}
