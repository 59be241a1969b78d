//! Row/shelf placement

use crate::error::PackError;
use crate::pack::Placement;
use crate::sprite::Sprite;
use crate::telemetry::{PackEvent, PackObserver};

/// Assign final positions with a left-to-right shelf scan.
///
/// Sprites must be in packing order (tallest first), so each row is opened
/// by its tallest member. Rows advance by the tallest margin-expanded
/// sprite they held, which keeps margin-expanded placements disjoint by
/// construction. A sprite that would run past an edge of the canvas aborts
/// with [`PackError::ShelfOverflow`] rather than overflowing silently.
pub fn place(
    sprites: &[&Sprite],
    size: u32,
    margin: u32,
    observer: &dyn PackObserver,
) -> Result<Vec<Placement>, PackError> {
    let mut placements = Vec::with_capacity(sprites.len());
    let mut x = 0u32;
    let mut y = 0u32;
    let mut row_height = 0u32;

    for sprite in sprites {
        let expanded_w = sprite.width() + 2 * margin;
        let expanded_h = sprite.height() + 2 * margin;

        if x + expanded_w > size {
            x = 0;
            y += row_height;
            row_height = 0;
        }
        if expanded_w > size || y + expanded_h > size {
            return Err(PackError::ShelfOverflow {
                name: sprite.name.clone(),
                needed: (y + expanded_h).max(expanded_w),
                size,
            });
        }

        let placement = Placement {
            name: sprite.name.clone(),
            x: x + margin,
            y: y + margin,
            width: sprite.width(),
            height: sprite.height(),
        };
        observer.on_event(PackEvent::SpritePlaced {
            name: &sprite.name,
            x: placement.x,
            y: placement.y,
        });
        placements.push(placement);

        row_height = row_height.max(expanded_h);
        x += expanded_w;
    }

    Ok(placements)
}
