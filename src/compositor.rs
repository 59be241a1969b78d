//! Canvas composition - draws placed sprites onto the atlas image

use image::{Rgba, RgbaImage};
use std::collections::HashMap;

use crate::pack::Atlas;
use crate::sprite::Sprite;

/// Transparent color for the atlas background
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Draw every placed sprite onto a fresh `size`x`size` canvas.
///
/// Draws are full-opacity overwrites, no blending. The pass is a single
/// serial loop over the placements: the canvas type is not documented safe
/// for concurrent region writes, so the guarded write path is the default.
pub fn compose(sprites: &[Sprite], atlas: &Atlas) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(atlas.size, atlas.size, TRANSPARENT);

    let by_name: HashMap<&str, &Sprite> =
        sprites.iter().map(|s| (s.name.as_str(), s)).collect();

    for placement in &atlas.placements {
        if let Some(sprite) = by_name.get(placement.name.as_str()) {
            blit(&mut canvas, &sprite.image, placement.x, placement.y);
        }
    }
    canvas
}

/// Copy a sprite's pixels onto the canvas at the given offset.
fn blit(canvas: &mut RgbaImage, sprite: &RgbaImage, x: u32, y: u32) {
    for sy in 0..sprite.height() {
        for sx in 0..sprite.width() {
            let pixel = *sprite.get_pixel(sx, sy);
            if x + sx < canvas.width() && y + sy < canvas.height() {
                canvas.put_pixel(x + sx, y + sy, pixel);
            }
        }
    }
}
