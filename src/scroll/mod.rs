//! Scroll domain: keyboard-driven shelf scrolling with a parallax
//! background.
//!
//! The animator runs once per frame in `Update`:
//! - `ScrollSystems::Input` applies lifecycle commands and key events
//! - `ScrollSystems::Tick` resolves the direction and steps the movement
//! - `ScrollSystems::Apply` writes the movement to every `Movable` and
//!   the parallax offset to the `ParallaxBackground`
//!
//! Tick and Apply only run while the animator is started.

mod animator;
mod components;
mod direction;
mod events;
mod keys;
mod systems;


pub use animator::{KeyDisposition, ScrollAnimator, ScrollFrame, ScrollTuning};
pub use components::{Movable, ParallaxBackground};
pub use direction::ScrollDirection;
pub use events::ScrollCommand;
pub use keys::{KeyState, ScrollControl};
pub use systems::scroll_running;

use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::scroll::systems::{
    advance_scroll, apply_scroll_commands, offset_parallax_background, read_scroll_keys,
    release_keys_on_focus_loss, translate_movables,
};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollSystems {
    Input,
    Tick,
    Apply,
}

pub struct ScrollPlugin;

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ScrollAnimator::new(ScrollTuning::default()))
            .register_type::<ScrollDirection>()
            .add_message::<ScrollCommand>()
            .add_message::<KeyboardInput>()
            .add_message::<WindowFocused>()
            .configure_sets(
                Update,
                (
                    ScrollSystems::Input,
                    ScrollSystems::Tick,
                    ScrollSystems::Apply,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    apply_scroll_commands,
                    release_keys_on_focus_loss,
                    read_scroll_keys,
                )
                    .chain()
                    .in_set(ScrollSystems::Input),
            )
            .add_systems(
                Update,
                advance_scroll
                    .in_set(ScrollSystems::Tick)
                    .run_if(scroll_running),
            )
            .add_systems(
                Update,
                (translate_movables, offset_parallax_background)
                    .in_set(ScrollSystems::Apply)
                    .run_if(scroll_running),
            );
    }
}
