//! Shelf domain: the background and the row of poster cards the scroll
//! animator moves.

mod components;
mod details;
mod layout;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{BackgroundTile, PosterCard};
pub use layout::{background_size, curtain_pattern, place_poster, wrap_background_x};
pub use resources::ShelfStock;

use bevy::prelude::*;

use crate::core::ShelfState;
use crate::scroll::ScrollSystems;
use crate::shelf::details::{spawn_details_panel, update_details_panel};
use crate::shelf::systems::{queue_posters, spawn_background, stock_posters, wrap_background};

pub struct ShelfPlugin;

impl Plugin for ShelfPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShelfStock>()
            .add_systems(
                OnEnter(ShelfState::Gallery),
                (spawn_background, queue_posters, spawn_details_panel),
            )
            .add_systems(
                Update,
                stock_posters
                    .before(ScrollSystems::Apply)
                    .run_if(in_state(ShelfState::Gallery)),
            )
            .add_systems(Update, wrap_background.after(ScrollSystems::Apply))
            .add_systems(
                Update,
                update_details_panel
                    .after(ScrollSystems::Apply)
                    .run_if(in_state(ShelfState::Gallery)),
            );
    }
}
