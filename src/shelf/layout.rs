//! Shelf domain: poster placement and background wrapping.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::ShelfSettings;

/// Where a poster sits before any scrolling is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosterPlacement {
    pub anchor_x: f32,
    pub y: f32,
    /// Radians around z.
    pub tilt: f32,
}

/// FNV-1a, stable across runs and toolchains.
fn stable_hash(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// Place the poster at `slot`. Jitter and tilt depend only on the layout
/// seed and the movie id, so a poster keeps its look when the shelf is
/// rebuilt.
pub fn place_poster(slot: usize, movie_id: &str, settings: &ShelfSettings) -> PosterPlacement {
    let mut rng = ChaCha8Rng::seed_from_u64(settings.layout_seed ^ stable_hash(movie_id));
    let jitter = settings.max_jitter.abs();
    let tilt = settings.max_tilt_degrees.abs();

    PosterPlacement {
        anchor_x: settings.shelf_start_x + slot as f32 * settings.poster_spacing,
        y: settings.shelf_y + rng.random_range(-jitter..=jitter),
        tilt: rng.random_range(-tilt..=tilt).to_radians(),
    }
}

/// Rendered x of a tiled background for a logical parallax offset.
///
/// The result stays within one tile so the background never runs out,
/// while the logical offset keeps growing.
pub fn wrap_background_x(offset_x: f32, tile_width: f32) -> f32 {
    if tile_width <= 0.0 {
        return offset_x;
    }
    offset_x.rem_euclid(tile_width)
}

/// Size of the background sprite: three tiles wide so the wrapped
/// position always covers the view.
pub fn background_size(tile_width: f32, height: f32) -> Vec2 {
    Vec2::new(tile_width * 3.0, height)
}

/// Pixels per curtain fold in the generated background.
const FOLD_WIDTH: f32 = 80.0;

/// RGBA8 pixels of a curtain tile: vertical folds shaded around `color`
/// and darkening towards the floor. The fold count is whole so the tile
/// repeats without a seam.
pub fn curtain_pattern(width: u32, height: u32, color: [f32; 3]) -> Vec<u8> {
    let folds = (width as f32 / FOLD_WIDTH).round().max(1.0);
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        let depth = 1.0 - 0.35 * (y as f32 / height.max(1) as f32);
        for x in 0..width {
            let phase = x as f32 / width as f32 * folds * std::f32::consts::TAU;
            let shade = (0.75 + 0.25 * phase.cos()) * depth;
            for channel in color {
                pixels.push(((channel * shade).clamp(0.0, 1.0) * 255.0).round() as u8);
            }
            pixels.push(255);
        }
    }
    pixels
}
