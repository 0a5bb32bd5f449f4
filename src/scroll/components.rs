//! Scroll domain: components for entities the animator moves.

use bevy::prelude::*;

/// Poster-like entity translated as part of the rigid shelf group.
///
/// `anchor_x` is the laid-out position; the rendered x is
/// `anchor_x + movement`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Movable {
    pub anchor_x: f32,
}

/// Background that follows the shelf at the parallax ratio.
///
/// `offset.y` stays 0 so the background remains vertically centred.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ParallaxBackground {
    pub offset: Vec2,
}
