//! Core domain: boot flow, camera and animator lifecycle.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{MovieCollection, ShelfSettings};
use crate::core::components::GalleryScoped;
use crate::core::state::ShelfState;
use crate::scroll::{ScrollAnimator, ScrollCommand};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Once content is loaded, apply the scroll tuning and open the gallery.
pub(crate) fn finish_boot(
    settings: Option<Res<ShelfSettings>>,
    collection: Option<Res<MovieCollection>>,
    mut animator: ResMut<ScrollAnimator>,
    mut next_state: ResMut<NextState<ShelfState>>,
) {
    let (Some(settings), Some(_)) = (settings, collection) else {
        return;
    };

    animator.set_tuning(settings.scroll_tuning());
    info!(
        "Scroll tuning: step {} px, parallax {}",
        settings.scroll_step, settings.parallax_factor
    );
    next_state.set(ShelfState::Gallery);
}

/// F5 reloads settings and collection by passing back through Boot.
pub(crate) fn reload_on_request(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<ShelfState>>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        info!("Reloading shelf content");
        next_state.set(ShelfState::Boot);
    }
}

pub(crate) fn start_scrolling(mut commands: MessageWriter<ScrollCommand>) {
    commands.write(ScrollCommand::Start);
}

pub(crate) fn stop_scrolling(mut commands: MessageWriter<ScrollCommand>) {
    commands.write(ScrollCommand::Stop);
}

pub(crate) fn despawn_gallery(mut commands: Commands, scoped: Query<Entity, With<GalleryScoped>>) {
    for entity in &scoped {
        commands.entity(entity).despawn();
    }
}
