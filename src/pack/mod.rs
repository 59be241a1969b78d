//! Atlas packing core
//!
//! Packing is two-phase: a feasibility search picks the smallest square
//! power-of-two canvas ([`estimate`]), then a row/shelf heuristic assigns
//! the actual positions ([`place`]). The [`pack`] driver runs both over the
//! same sprite order and doubles the canvas whenever the shelf heuristic
//! cannot honor the estimate.

mod estimate;
mod shelf;

pub use estimate::estimate;
pub use shelf::place;

use crate::error::PackError;
use crate::sprite::Sprite;
use crate::telemetry::{PackEvent, PackObserver};

/// Largest atlas edge tried before packing is abandoned.
pub const MAX_ATLAS_SIZE: u32 = 16_384;

/// An axis-aligned pixel rectangle inside the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// True if the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Final position of one sprite inside the atlas.
///
/// `(x, y)` is where the sprite's pixels land; the margin sits outside this
/// rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A packed atlas: canvas edge length plus every sprite's placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas {
    /// Canvas edge length, always a power of two
    pub size: u32,
    pub placements: Vec<Placement>,
}

/// Order sprites for packing: tallest first, ties broken by name.
///
/// The name tie-break makes packing reproducible for sprite sets with equal
/// heights.
pub fn sort_for_packing(sprites: &[Sprite]) -> Vec<&Sprite> {
    let mut sorted: Vec<&Sprite> = sprites.iter().collect();
    sorted.sort_by(|a, b| b.height().cmp(&a.height()).then_with(|| a.name.cmp(&b.name)));
    sorted
}

/// Pack sprites into the smallest square power-of-two atlas that holds them.
///
/// An empty sprite set packs into a well-formed 1x1 atlas with no
/// placements. The estimated size is a capacity judgement by a different
/// algorithm than the shelf placer; when the shelf overflows it, the canvas
/// doubles (up to [`MAX_ATLAS_SIZE`]) until placement succeeds, so the
/// returned atlas always satisfies the placement invariants.
pub fn pack(
    sprites: &[Sprite],
    margin: u32,
    observer: &dyn PackObserver,
) -> Result<Atlas, PackError> {
    let sorted = sort_for_packing(sprites);
    let mut size = estimate(&sorted, margin, observer)?;
    observer.on_event(PackEvent::SizeSelected { size });

    loop {
        match place(&sorted, size, margin, observer) {
            Ok(placements) => return Ok(Atlas { size, placements }),
            Err(PackError::ShelfOverflow { .. }) if size < MAX_ATLAS_SIZE => {
                let grown = size * 2;
                observer.on_event(PackEvent::SizeGrown { from: size, to: grown });
                size = grown;
            }
            Err(e) => return Err(e),
        }
    }
}
