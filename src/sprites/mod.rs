//! Sprites module for the decorative walker.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON
//! - Spawning the walker from its sheet
//! - Walk cycle playback following the shelf scroll direction

pub mod animation;
pub mod manifest;


use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

use crate::core::{GalleryScoped, ShelfLayer, ShelfState};
use crate::scroll::ScrollSystems;

/// Manifest key of the walker sheet.
pub const WALKER_SHEET: &str = "walker";

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_systems(Startup, load_sprite_manifest)
            .add_systems(OnEnter(ShelfState::Gallery), spawn_walker)
            .add_systems(
                Update,
                (follow_scroll_direction, update_walk_frames)
                    .chain()
                    .after(ScrollSystems::Tick),
            );
    }
}

/// System to load the sprite manifest at startup.
fn load_sprite_manifest(mut manifest: ResMut<SpriteManifest>, asset_server: Res<AssetServer>) {
    manifest.load_from_file(MANIFEST_PATH, &asset_server);
}

/// Size of the stand-in walker drawn when the sheet image is missing.
pub const PLACEHOLDER_WALKER_SIZE: Vec2 = Vec2::new(28.0, 56.0);

pub(crate) fn spawn_walker(
    mut commands: Commands,
    manifest: Res<SpriteManifest>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let Some((sheet, texture)) = manifest.get_sheet(WALKER_SHEET) else {
        spawn_placeholder_walker(&mut commands, manifest.sheets.get(WALKER_SHEET));
        return;
    };

    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(sheet.size),
        sheet.columns,
        sheet.rows(),
        None,
        None,
    ));
    let anchor: Vec2 = sheet.anchor.map(Vec2::from).unwrap_or(Vec2::ZERO);

    commands.spawn((
        Walker,
        GalleryScoped,
        WalkController::new(sheet.frames, sheet.frame_duration),
        Sprite::from_atlas_image(texture, TextureAtlas { layout, index: 0 }),
        Transform::from_xyz(anchor.x, anchor.y, ShelfLayer::Walker.z_index())
            .with_scale(Vec3::splat(sheet.scale)),
    ));
}

/// Plain rectangle walker. Keeps the sheet's position and timing when
/// only the image is missing.
fn spawn_placeholder_walker(commands: &mut Commands, sheet: Option<&SpriteSheetDef>) {
    warn!(
        "No '{}' sheet texture available, spawning a placeholder walker",
        WALKER_SHEET
    );
    let (controller, anchor, scale) = match sheet {
        Some(sheet) => (
            WalkController::new(sheet.frames, sheet.frame_duration),
            sheet.anchor.map(Vec2::from).unwrap_or(Vec2::ZERO),
            sheet.scale,
        ),
        None => (WalkController::default(), Vec2::ZERO, 1.0),
    };

    commands.spawn((
        Walker,
        GalleryScoped,
        controller,
        Sprite::from_color(Color::srgb(0.85, 0.78, 0.55), PLACEHOLDER_WALKER_SIZE),
        Transform::from_xyz(anchor.x, anchor.y, ShelfLayer::Walker.z_index())
            .with_scale(Vec3::splat(scale)),
    ));
}
