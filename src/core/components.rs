//! Core domain: markers and draw ordering shared by the view modules.

use bevy::prelude::*;

/// Entity that belongs to the gallery view and is despawned when the view
/// is left.
#[derive(Component, Debug)]
pub struct GalleryScoped;

/// Draw order of the gallery layers.
/// Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShelfLayer {
    Background = 0,
    Poster = 10,
    /// Relative to the poster it is parented to.
    PosterLabel = 1,
    Walker = 20,
}

impl ShelfLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z_index(&self) -> f32 {
        (*self as i32) as f32 * 0.1
    }
}
