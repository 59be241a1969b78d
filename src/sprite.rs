//! Sprite model - one source image plus its identity

use image::RgbaImage;

/// A named source image to be placed into the atlas.
///
/// The packing core reads only the name and dimensions; the pixels are
/// carried through untouched until composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    /// Unique identity, derived from the source file stem
    pub name: String,
    pub image: RgbaImage,
}

impl Sprite {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self { name: name.into(), image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
