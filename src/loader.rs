//! Sprite loading - directory scan plus parallel PNG decode

use glob::glob;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::sprite::Sprite;

/// Why one source file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of loading a sprite directory.
///
/// Failures are carried alongside the sprites that did load; a bad file
/// never aborts the batch.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub sprites: Vec<Sprite>,
    pub failures: Vec<LoadFailure>,
}

/// Find sprite source files in a directory (top level only, `.png`).
pub fn find_sprite_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(paths) = glob(&format!("{}/*.png", dir.display())) {
        files.extend(paths.filter_map(Result::ok));
    }
    files.sort();
    files
}

/// Load every PNG in the directory, one unit of work per file.
///
/// Files decode in parallel and the call joins on the whole batch. Sprites
/// come back sorted by name so the load phase is deterministic regardless
/// of worker scheduling.
pub fn load_sprites(dir: &Path) -> LoadResult {
    let files = find_sprite_files(dir);

    let outcomes: Vec<Result<Sprite, LoadFailure>> =
        files.par_iter().map(|path| load_one(path)).collect();

    let mut result = LoadResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(sprite) => result.sprites.push(sprite),
            Err(failure) => result.failures.push(failure),
        }
    }
    result.sprites.sort_by(|a, b| a.name.cmp(&b.name));
    result
}

/// Decode one source file into a sprite named after its file stem.
fn load_one(path: &Path) -> Result<Sprite, LoadFailure> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LoadFailure {
            path: path.to_path_buf(),
            reason: "file name is not valid UTF-8".to_string(),
        })?
        .to_string();

    let image = image::open(path)
        .map_err(|e| LoadFailure { path: path.to_path_buf(), reason: e.to_string() })?
        .to_rgba8();

    Ok(Sprite::new(name, image))
}
