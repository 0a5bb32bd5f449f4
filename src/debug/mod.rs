//! Debug overlay for tuning the shelf (dev-tools builds only).
//!
//! F3 toggles a text panel with the animator state and stocking progress.

use bevy::prelude::*;

use crate::core::ShelfState;
use crate::scroll::{ScrollAnimator, ScrollSystems};
use crate::shelf::ShelfStock;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_overlay, update_debug_overlay)
                .chain()
                .after(ScrollSystems::Apply),
        );
    }
}

fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        commands.spawn((
            DebugInfoOverlay,
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.85)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

fn update_debug_overlay(
    animator: Res<ScrollAnimator>,
    stock: Res<ShelfStock>,
    state: Res<State<ShelfState>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let frame = animator.frame();
    **text = format!(
        "State: {:?}\nRunning: {} (session {})\nDirection: {}\nMovement: {} px\nParallax: {:.1} px\nKeys held: {}\nPosters: {} stocked, {} pending",
        state.get(),
        animator.is_running(),
        animator.sessions(),
        frame.direction.label(),
        frame.movement,
        frame.parallax_offset,
        animator.keys().held_count(),
        stock.stocked(),
        stock.pending()
    );
}
