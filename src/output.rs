//! PNG output and file path generation

use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::manifest::ManifestFormat;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    image.save(path)?;
    Ok(())
}

/// Write manifest text to a file, creating parent directories as needed.
pub fn save_manifest(text: &str, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    std::fs::write(path, text)?;
    Ok(())
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Output paths for an atlas: the image file and the manifest file.
pub fn atlas_paths(out_dir: &Path, name: &str, format: ManifestFormat) -> (PathBuf, PathBuf) {
    (
        out_dir.join(format!("{}.png", name)),
        out_dir.join(format!("{}.{}", name, format.extension())),
    )
}
