//! Core domain: app state definitions for the view flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum ShelfState {
    /// Content is being loaded.
    #[default]
    Boot,
    /// The poster shelf is on screen and scrollable.
    Gallery,
}
