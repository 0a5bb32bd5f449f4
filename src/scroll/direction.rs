//! Scroll domain: direction resolution with sticky tie-breaking.

use bevy::prelude::*;

/// Direction the shelf is scrolling during a tick.
///
/// `Right` means the user is browsing towards later posters, so the shelf
/// itself slides left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum ScrollDirection {
    #[default]
    None,
    Left,
    Right,
}

impl ScrollDirection {
    /// Resolve this tick's direction from the held controls and the
    /// previous tick's direction.
    ///
    /// Right wins a fresh tie. Once a direction is committed the opposite
    /// control is ignored; holding both after a commitment yields `None`
    /// for one tick when the committed key is released, then the other
    /// side is picked up.
    pub fn resolve(right_held: bool, left_held: bool, previous: ScrollDirection) -> Self {
        if right_held && previous != ScrollDirection::Left {
            ScrollDirection::Right
        } else if left_held && previous != ScrollDirection::Right {
            ScrollDirection::Left
        } else {
            ScrollDirection::None
        }
    }

    /// Sign applied to the movement accumulator.
    pub fn movement_sign(self) -> i32 {
        match self {
            ScrollDirection::Right => -1,
            ScrollDirection::Left => 1,
            ScrollDirection::None => 0,
        }
    }

    pub fn is_moving(self) -> bool {
        self != ScrollDirection::None
    }

    pub fn label(self) -> &'static str {
        match self {
            ScrollDirection::None => "none",
            ScrollDirection::Left => "left",
            ScrollDirection::Right => "right",
        }
    }
}
