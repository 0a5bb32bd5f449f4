//! Core domain: view state, camera and the gallery lifecycle.

mod components;
mod state;
mod systems;

pub use components::{GalleryScoped, ShelfLayer};
pub use state::ShelfState;

use bevy::prelude::*;

use crate::core::systems::{
    despawn_gallery, finish_boot, reload_on_request, setup_camera, start_scrolling,
    stop_scrolling,
};
use crate::scroll::ScrollSystems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ShelfState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(ShelfState::Boot)))
            .add_systems(
                Update,
                reload_on_request
                    .after(ScrollSystems::Input)
                    .run_if(in_state(ShelfState::Gallery)),
            )
            .add_systems(OnEnter(ShelfState::Gallery), start_scrolling)
            .add_systems(
                OnExit(ShelfState::Gallery),
                (stop_scrolling, despawn_gallery),
            );
    }
}
