//! Scroll domain: systems feeding input to the animator and applying its
//! output to the shelf.

use bevy::ecs::message::MessageReader;
use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::scroll::{KeyDisposition, Movable, ParallaxBackground, ScrollAnimator, ScrollCommand};

/// Run condition: true while the animator is started.
pub fn scroll_running(animator: Res<ScrollAnimator>) -> bool {
    animator.is_running()
}

pub(crate) fn apply_scroll_commands(
    mut commands: MessageReader<ScrollCommand>,
    mut animator: ResMut<ScrollAnimator>,
) {
    for command in commands.read() {
        match command {
            ScrollCommand::Start => {
                if animator.start() {
                    info!(
                        "Shelf scrolling started (session {}, movement {})",
                        animator.sessions(),
                        animator.movement()
                    );
                } else {
                    debug!("Ignoring start: shelf scrolling already running");
                }
            }
            ScrollCommand::Stop => {
                if animator.stop() {
                    info!("Shelf scrolling stopped at movement {}", animator.movement());
                } else {
                    debug!("Ignoring stop: shelf scrolling not running");
                }
            }
        }
    }
}

/// Key-up events are lost while unfocused, so drop everything held.
pub(crate) fn release_keys_on_focus_loss(
    mut focus_events: MessageReader<WindowFocused>,
    mut animator: ResMut<ScrollAnimator>,
) {
    let lost_focus = focus_events.read().any(|event| !event.focused);
    if lost_focus && animator.keys().held_count() > 0 {
        debug!("Window lost focus, releasing held keys");
        animator.release_all();
    }
}

pub(crate) fn read_scroll_keys(
    mut key_events: MessageReader<KeyboardInput>,
    mut animator: ResMut<ScrollAnimator>,
    mut keyboard: Option<ResMut<ButtonInput<KeyCode>>>,
) {
    for event in key_events.read() {
        match event.state {
            ButtonState::Pressed => {
                let disposition = animator.handle_key_down(event.logical_key.clone());
                if disposition == KeyDisposition::Consumed {
                    // Later systems must not treat shelf keys as fresh presses
                    if let Some(keyboard) = keyboard.as_deref_mut() {
                        keyboard.clear_just_pressed(event.key_code);
                    }
                }
            }
            ButtonState::Released => animator.handle_key_up(event.logical_key.clone()),
        }
    }
}

pub(crate) fn advance_scroll(mut animator: ResMut<ScrollAnimator>) {
    let previous = animator.direction();
    let frame = animator.tick();
    if frame.direction != previous {
        debug!(
            "Scroll direction {} -> {} at movement {}",
            previous.label(),
            frame.direction.label(),
            frame.movement
        );
    }
}

pub(crate) fn translate_movables(
    animator: Res<ScrollAnimator>,
    mut movables: Query<(&Movable, &mut Transform)>,
) {
    let movement = animator.movement() as f32;
    for (movable, mut transform) in &mut movables {
        transform.translation.x = movable.anchor_x + movement;
    }
}

pub(crate) fn offset_parallax_background(
    animator: Res<ScrollAnimator>,
    mut backgrounds: Query<&mut ParallaxBackground>,
) {
    let offset = Vec2::new(animator.parallax_offset(), 0.0);
    for mut background in &mut backgrounds {
        background.offset = offset;
    }
}
