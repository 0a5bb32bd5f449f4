//! Shelf domain: spawning the background and stocking poster cards.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::sprite::SpriteImageMode;
use bevy::text::TextBounds;

use crate::content::{MovieCollection, MovieEntry, ShelfSettings};
use crate::core::{GalleryScoped, ShelfLayer};
use crate::scroll::{Movable, ParallaxBackground, ScrollAnimator};
use crate::shelf::{
    BackgroundTile, PosterCard, ShelfStock, background_size, curtain_pattern, place_poster,
    wrap_background_x,
};

/// Rows in the generated curtain tile. The sprite stretches it vertically.
const CURTAIN_ROWS: u32 = 64;

pub(crate) fn spawn_background(
    mut commands: Commands,
    settings: Res<ShelfSettings>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
) {
    let background = &settings.background;
    let size = background_size(background.tile_width, background.height);

    let image = match &background.image {
        Some(path) => asset_server.load(path),
        None => {
            let width = background.tile_width.round().max(1.0) as u32;
            info!("No background image set, generating a {}px curtain tile", width);
            images.add(Image::new(
                Extent3d {
                    width,
                    height: CURTAIN_ROWS,
                    depth_or_array_layers: 1,
                },
                TextureDimension::D2,
                curtain_pattern(width, CURTAIN_ROWS, background.color),
                TextureFormat::Rgba8UnormSrgb,
                RenderAssetUsages::RENDER_WORLD,
            ))
        }
    };

    commands.spawn((
        ParallaxBackground::default(),
        BackgroundTile {
            width: background.tile_width,
        },
        GalleryScoped,
        Sprite {
            image,
            custom_size: Some(size),
            image_mode: SpriteImageMode::Tiled {
                tile_x: true,
                tile_y: false,
                stretch_value: 1.0,
            },
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, ShelfLayer::Background.z_index()),
    ));
}

pub(crate) fn queue_posters(collection: Res<MovieCollection>, mut stock: ResMut<ShelfStock>) {
    stock.refill(collection.entries.iter().cloned());
    info!("Queued {} posters for the shelf", stock.pending());
}

pub(crate) fn stock_posters(
    mut commands: Commands,
    mut stock: ResMut<ShelfStock>,
    settings: Res<ShelfSettings>,
    animator: Res<ScrollAnimator>,
    asset_server: Res<AssetServer>,
) {
    if stock.pending() == 0 {
        return;
    }

    let movement = animator.movement() as f32;
    for (slot, entry) in stock.next_batch(settings.posters_per_frame) {
        spawn_poster(
            &mut commands,
            &settings,
            &asset_server,
            slot,
            &entry,
            movement,
        );
    }

    if stock.pending() == 0 {
        info!("Shelf stocked with {} posters", stock.stocked());
    }
}

fn spawn_poster(
    commands: &mut Commands,
    settings: &ShelfSettings,
    asset_server: &AssetServer,
    slot: usize,
    entry: &MovieEntry,
    movement: f32,
) {
    let placement = place_poster(slot, &entry.id, settings);
    let size = settings.poster_size();
    let era = entry.era();

    let sprite = match &entry.poster {
        Some(path) => Sprite {
            image: asset_server.load(path),
            custom_size: Some(size),
            ..default()
        },
        None => Sprite::from_color(era.tint(), size),
    };

    let mut poster = commands.spawn((
        PosterCard {
            movie_id: entry.id.clone(),
            era,
            slot,
        },
        Movable {
            anchor_x: placement.anchor_x,
        },
        GalleryScoped,
        sprite,
        // Start at the current scroll position so the card does not flash
        // at its anchor before the next tick
        Transform::from_xyz(
            placement.anchor_x + movement,
            placement.y,
            ShelfLayer::Poster.z_index(),
        )
        .with_rotation(Quat::from_rotation_z(placement.tilt)),
    ));

    if entry.poster.is_none() {
        poster.with_children(|card| {
            card.spawn((
                Text2d::new(entry.caption()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextBounds::new_horizontal(size.x - 16.0),
                Transform::from_xyz(0.0, 0.0, ShelfLayer::PosterLabel.z_index()),
            ));
        });
    }

    debug!(
        "Stocked '{}' in slot {} at x={}",
        entry.title, slot, placement.anchor_x
    );
}

pub(crate) fn wrap_background(
    mut backgrounds: Query<(&ParallaxBackground, &BackgroundTile, &mut Transform)>,
) {
    for (background, tile, mut transform) in &mut backgrounds {
        transform.translation.x = wrap_background_x(background.offset.x, tile.width);
        transform.translation.y = background.offset.y;
    }
}
