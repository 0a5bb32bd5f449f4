//! Shelf domain: components for posters and the background.

use bevy::prelude::*;

use crate::content::Era;

/// Poster card for one collection entry.
#[derive(Component, Debug, Clone)]
pub struct PosterCard {
    pub movie_id: String,
    pub era: Era,
    /// Position on the shelf, counted from the first poster.
    pub slot: usize,
}

/// Width of one background tile, used to wrap the rendered position.
#[derive(Component, Debug, Clone, Copy)]
pub struct BackgroundTile {
    pub width: f32,
}
