//! Scroll domain: the animator resource that owns key state and movement.

use bevy::input::keyboard::Key;
use bevy::prelude::*;

use crate::scroll::{KeyState, ScrollControl, ScrollDirection};

/// Per-tick step and parallax ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTuning {
    /// Pixels the shelf moves per tick while a direction is held.
    pub step: i32,
    /// Fraction of the shelf movement applied to the background.
    pub parallax_factor: f32,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            step: 5,
            parallax_factor: 0.5,
        }
    }
}

/// What the host should do with a key-down after the animator saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Directional key: suppress any default handling.
    Consumed,
    /// Leave the key to other consumers.
    PassThrough,
}

/// Snapshot of the animator after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub direction: ScrollDirection,
    pub movement: i32,
    pub parallax_offset: f32,
}

/// Keyboard-driven horizontal scroller for the poster shelf.
///
/// Input is only taken while running. `movement` survives stop/start so
/// the shelf does not jump back when the gallery is re-entered.
#[derive(Resource, Debug, Default)]
pub struct ScrollAnimator {
    keys: KeyState,
    direction: ScrollDirection,
    movement: i32,
    tuning: ScrollTuning,
    running: bool,
    sessions: u32,
}

impl ScrollAnimator {
    pub fn new(tuning: ScrollTuning) -> Self {
        Self {
            tuning,
            ..default()
        }
    }

    pub fn set_tuning(&mut self, tuning: ScrollTuning) {
        self.tuning = tuning;
    }

    /// Begin taking input and ticking. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.sessions += 1;
        true
    }

    /// Stop ticking and drop all held keys. Returns false if not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.keys.release_all();
        self.direction = ScrollDirection::None;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of times the animator has been started.
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn handle_key_down(&mut self, key: Key) -> KeyDisposition {
        if !self.running {
            return KeyDisposition::PassThrough;
        }
        let disposition = if ScrollControl::from_key(&key).is_some() {
            KeyDisposition::Consumed
        } else {
            KeyDisposition::PassThrough
        };
        self.keys.press(key);
        disposition
    }

    pub fn handle_key_up(&mut self, key: Key) {
        if self.running {
            self.keys.release(key);
        }
    }

    /// Forget every held key, e.g. after the window lost focus and key-up
    /// events can no longer arrive.
    pub fn release_all(&mut self) {
        self.keys.release_all();
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Advance one frame. Does nothing while stopped.
    pub fn tick(&mut self) -> ScrollFrame {
        if self.running {
            let right = self.keys.control_held(ScrollControl::Right);
            let left = self.keys.control_held(ScrollControl::Left);
            self.direction = ScrollDirection::resolve(right, left, self.direction);
            let delta = self.direction.movement_sign().saturating_mul(self.tuning.step);
            self.movement = self.movement.saturating_add(delta);
        }
        self.frame()
    }

    pub fn frame(&self) -> ScrollFrame {
        ScrollFrame {
            direction: self.direction,
            movement: self.movement,
            parallax_offset: self.parallax_offset(),
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn movement(&self) -> i32 {
        self.movement
    }

    pub fn parallax_offset(&self) -> f32 {
        self.movement as f32 * self.tuning.parallax_factor
    }
}
