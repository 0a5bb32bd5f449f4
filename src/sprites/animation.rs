//! Walk cycle state and frame playback for the decorative walker.
//!
//! The walker stays in place; it walks while the shelf scrolls and idles
//! otherwise, facing the direction the user is browsing.

use bevy::prelude::*;

use crate::scroll::{ScrollAnimator, ScrollDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WalkState {
    #[default]
    Idle,
    Walk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Component for walk cycle playback on an atlas sprite.
#[derive(Component, Debug)]
pub struct WalkController {
    pub state: WalkState,
    pub facing: Facing,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in the walk cycle.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl Default for WalkController {
    fn default() -> Self {
        Self {
            state: WalkState::Idle,
            facing: Facing::Right,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.1,
        }
    }
}

impl WalkController {
    pub fn new(total_frames: u32, frame_duration: f32) -> Self {
        Self {
            total_frames: total_frames.max(1),
            frame_duration,
            ..default()
        }
    }

    /// Match the walk state and facing to the shelf's scroll direction.
    /// Returns true if the walk state changed.
    pub fn follow_scroll(&mut self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Right => self.facing = Facing::Right,
            ScrollDirection::Left => self.facing = Facing::Left,
            ScrollDirection::None => {}
        }

        let state = if direction.is_moving() {
            WalkState::Walk
        } else {
            WalkState::Idle
        };
        self.set_state(state)
    }

    /// Set the walk state, resetting playback if it changed.
    pub fn set_state(&mut self, state: WalkState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        true
    }

    /// Advance playback by `dt` seconds. Idle holds the first frame.
    pub fn advance(&mut self, dt: f32) {
        if self.state == WalkState::Idle || self.frame_duration <= 0.0 {
            return;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.total_frames;
        }
    }

    pub fn flip_x(&self) -> bool {
        self.facing == Facing::Left
    }
}

/// Marker for the decorative walker sprite.
#[derive(Component, Debug)]
pub struct Walker;

pub(crate) fn follow_scroll_direction(
    animator: Res<ScrollAnimator>,
    mut query: Query<&mut WalkController>,
) {
    let direction = animator.direction();
    for mut controller in &mut query {
        if controller.follow_scroll(direction) {
            debug!("Walker now {:?} facing {:?}", controller.state, controller.facing);
        }
    }
}

pub(crate) fn update_walk_frames(
    time: Res<Time>,
    mut query: Query<(&mut WalkController, &mut Sprite)>,
) {
    for (mut controller, mut sprite) in &mut query {
        controller.advance(time.delta_secs());

        sprite.flip_x = controller.flip_x();
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = controller.current_frame as usize;
        }
    }
}
