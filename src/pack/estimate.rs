//! Size estimation via a brute-force feasibility search

use crate::error::PackError;
use crate::pack::{Rect, MAX_ATLAS_SIZE};
use crate::sprite::Sprite;
use crate::telemetry::{PackEvent, PackObserver};

/// Find the smallest power-of-two canvas judged able to hold the sprites.
///
/// Sprites must already be in packing order (see
/// [`sort_for_packing`](crate::pack::sort_for_packing)). Feasibility is
/// judged by a row-major first-fit scan over candidate positions; this is
/// intentionally brute force, since sprite counts and canvas sizes stay
/// small for an offline tool. Sizes double from 1 up to [`MAX_ATLAS_SIZE`],
/// past which the search fails instead of looping.
pub fn estimate(
    sprites: &[&Sprite],
    margin: u32,
    observer: &dyn PackObserver,
) -> Result<u32, PackError> {
    let total: u64 = sprites
        .iter()
        .map(|s| u64::from(s.width() + 2 * margin) * u64::from(s.height() + 2 * margin))
        .sum();

    let mut size = 1u32;
    loop {
        observer.on_event(PackEvent::FillAttempt { size });
        if can_fill(sprites, margin, total, size) {
            return Ok(size);
        }
        if size >= MAX_ATLAS_SIZE {
            return Err(PackError::AtlasLimitExceeded { limit: MAX_ATLAS_SIZE, margin });
        }
        size *= 2;
    }
}

/// Feasibility test at one canvas size.
fn can_fill(sprites: &[&Sprite], margin: u32, total: u64, size: u32) -> bool {
    if sprites.is_empty() {
        return true;
    }
    // Area lower bound
    if u64::from(size) * u64::from(size) < total {
        return false;
    }

    let expanded: Vec<(u32, u32)> = sprites
        .iter()
        .map(|s| (s.width() + 2 * margin, s.height() + 2 * margin))
        .collect();
    if expanded.iter().any(|&(w, h)| w > size || h > size) {
        return false;
    }

    let mut accepted: Vec<Rect> = Vec::with_capacity(sprites.len());
    for &(w, h) in &expanded {
        if accepted.is_empty() {
            accepted.push(Rect::new(0, 0, w, h));
            continue;
        }
        match first_free_position(&accepted, w, h, size) {
            Some((x, y)) => accepted.push(Rect::new(x, y, w, h)),
            // one sprite without a spot sinks the whole size
            None => return false,
        }
    }
    true
}

/// Row-major scan for the first position where a `w`x`h` rect fits without
/// intersecting any accepted rect. Caller guarantees `w <= size` and
/// `h <= size`.
fn first_free_position(accepted: &[Rect], w: u32, h: u32, size: u32) -> Option<(u32, u32)> {
    for y in 0..=(size - h) {
        for x in 0..=(size - w) {
            let rect = Rect::new(x, y, w, h);
            if !accepted.iter().any(|r| rect.intersects(r)) {
                return Some((x, y));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::sort_for_packing;
    use crate::telemetry::NullObserver;
    use image::RgbaImage;
    use std::cell::RefCell;

    fn sprites(dims: &[(u32, u32)]) -> Vec<Sprite> {
        dims.iter()
            .enumerate()
            .map(|(i, &(w, h))| Sprite::new(format!("s{}", i), RgbaImage::new(w, h)))
            .collect()
    }

    /// Exhaustive packing oracle. Tries every order and every candidate
    /// position whose left and top edges abut the canvas border or a placed
    /// rect, which is enough to decide whether any packing exists.
    fn oracle_fits(dims: &[(u32, u32)], size: u32) -> bool {
        fn rec(remaining: &[(u32, u32)], placed: &mut Vec<Rect>, size: u32) -> bool {
            if remaining.is_empty() {
                return true;
            }
            for i in 0..remaining.len() {
                let (w, h) = remaining[i];
                let mut rest = remaining.to_vec();
                rest.remove(i);

                let mut xs = vec![0];
                let mut ys = vec![0];
                for r in placed.iter() {
                    xs.push(r.x + r.width);
                    ys.push(r.y + r.height);
                }
                for &y in &ys {
                    for &x in &xs {
                        if x + w > size || y + h > size {
                            continue;
                        }
                        let rect = Rect::new(x, y, w, h);
                        if placed.iter().any(|r| rect.intersects(r)) {
                            continue;
                        }
                        placed.push(rect);
                        if rec(&rest, placed, size) {
                            return true;
                        }
                        placed.pop();
                    }
                }
            }
            false
        }
        rec(dims, &mut Vec::new(), size)
    }

    fn oracle_min_size(dims: &[(u32, u32)], margin: u32) -> u32 {
        let expanded: Vec<(u32, u32)> =
            dims.iter().map(|&(w, h)| (w + 2 * margin, h + 2 * margin)).collect();
        let mut size = 1;
        while !oracle_fits(&expanded, size) {
            size *= 2;
        }
        size
    }

    struct SizeRecorder {
        attempts: RefCell<Vec<u32>>,
    }

    impl PackObserver for SizeRecorder {
        fn on_event(&self, event: PackEvent<'_>) {
            if let PackEvent::FillAttempt { size } = event {
                self.attempts.borrow_mut().push(size);
            }
        }
    }

    #[test]
    fn test_empty_set_is_feasible_at_one() {
        let all = sprites(&[]);
        let sorted = sort_for_packing(&all);
        assert_eq!(estimate(&sorted, 2, &NullObserver).unwrap(), 1);
    }

    #[test]
    fn test_area_lower_bound_holds() {
        for margin in [0, 1, 2, 5] {
            let all = sprites(&[(10, 10), (20, 20), (5, 5), (33, 7)]);
            let sorted = sort_for_packing(&all);
            let size = estimate(&sorted, margin, &NullObserver).unwrap();
            assert!(size.is_power_of_two());

            let total: u64 = sorted
                .iter()
                .map(|s| u64::from(s.width() + 2 * margin) * u64::from(s.height() + 2 * margin))
                .sum();
            assert!(u64::from(size) * u64::from(size) >= total);
            for s in &sorted {
                assert!(s.width() + 2 * margin <= size);
                assert!(s.height() + 2 * margin <= size);
            }
        }
    }

    #[test]
    fn test_mixed_set_matches_oracle_and_doubles_up() {
        // Expanded rects 14, 24 and 9: the 24 and 14 cannot share a 32
        // canvas, so the search has to go one doubling past the area bound
        let dims = [(10, 10), (20, 20), (5, 5)];
        let margin = 2;
        let all = sprites(&dims);
        let sorted = sort_for_packing(&all);

        let recorder = SizeRecorder { attempts: RefCell::new(Vec::new()) };
        let size = estimate(&sorted, margin, &recorder).unwrap();

        assert_eq!(size, oracle_min_size(&dims, margin));
        // Doubling visits every size from 1 up to the answer
        let mut expected = Vec::new();
        let mut s = 1;
        while s <= size {
            expected.push(s);
            s *= 2;
        }
        assert_eq!(*recorder.attempts.borrow(), expected);
    }

    #[test]
    fn test_single_sprite_rounds_up_to_power_of_two() {
        let all = sprites(&[(100, 100)]);
        let sorted = sort_for_packing(&all);
        assert_eq!(estimate(&sorted, 0, &NullObserver).unwrap(), 128);
    }

    #[test]
    fn test_margin_counts_against_fit() {
        // 100 wide fits a 128 canvas bare, but not with 15 pixels of margin
        let all = sprites(&[(100, 100)]);
        let sorted = sort_for_packing(&all);
        assert_eq!(estimate(&sorted, 15, &NullObserver).unwrap(), 256);
    }

    #[test]
    fn test_unfittable_sprite_fails_instead_of_looping() {
        let all = sprites(&[(20_000, 10)]);
        let sorted = sort_for_packing(&all);
        let err = estimate(&sorted, 0, &NullObserver).unwrap_err();
        assert_eq!(err, PackError::AtlasLimitExceeded { limit: MAX_ATLAS_SIZE, margin: 0 });
    }

    #[test]
    fn test_infeasible_interior_sprite_fails_the_size() {
        // The area bound passes at 8 (40+20+4 = 64), but the full-height
        // 5x8 sprite leaves only a 3-wide strip, so the 4x5 sprite in the
        // middle of the order finds no candidate and the size must fail
        // even though the trailing 2x2 would still fit.
        let all = sprites(&[(5, 8), (4, 5), (2, 2)]);
        let sorted = sort_for_packing(&all);
        let size = estimate(&sorted, 0, &NullObserver).unwrap();
        assert_eq!(size, 16);
    }
}
