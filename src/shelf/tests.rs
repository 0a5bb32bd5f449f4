//! Shelf domain: tests for layout and stocking.

use std::f32::consts::PI;

use bevy::prelude::*;

use super::details::{DetailsPanel, details_text, nearest_to_centre, update_details_panel};
use super::{
    PosterCard, ShelfStock, background_size, curtain_pattern, place_poster, wrap_background_x,
};
use crate::content::{Era, MovieCollection, MovieEntry, ShelfSettings};

fn entry(id: &str) -> MovieEntry {
    MovieEntry {
        id: id.to_string(),
        title: id.to_uppercase(),
        year: 2000,
        director: "Unknown".to_string(),
        genre: Vec::new(),
        plot: None,
        runtime: None,
        poster: None,
        rating: None,
        tags: Vec::new(),
        notes: None,
        format: None,
        audio_quality: None,
        purchased_at: None,
        watched: false,
    }
}

#[test]
fn test_posters_are_spaced_by_slot() {
    let settings = ShelfSettings::default();
    let first = place_poster(0, "a", &settings);
    let third = place_poster(2, "c", &settings);
    assert_eq!(first.anchor_x, settings.shelf_start_x);
    assert_eq!(
        third.anchor_x,
        settings.shelf_start_x + 2.0 * settings.poster_spacing
    );
}

#[test]
fn test_placement_is_reproducible_and_bounded() {
    let settings = ShelfSettings::default();
    for id in ["tt0047478", "tt0078748", "tt1375666"] {
        let first = place_poster(3, id, &settings);
        let again = place_poster(3, id, &settings);
        assert_eq!(first, again);

        assert!((first.y - settings.shelf_y).abs() <= settings.max_jitter);
        assert!(first.tilt.abs() <= settings.max_tilt_degrees * PI / 180.0 + f32::EPSILON);
    }
}

#[test]
fn test_zero_jitter_keeps_posters_level() {
    let settings = ShelfSettings {
        max_jitter: 0.0,
        max_tilt_degrees: 0.0,
        ..Default::default()
    };
    let placement = place_poster(1, "level", &settings);
    assert_eq!(placement.y, settings.shelf_y);
    assert_eq!(placement.tilt, 0.0);
}

#[test]
fn test_background_wraps_within_one_tile() {
    assert_eq!(wrap_background_x(0.0, 1280.0), 0.0);
    assert_eq!(wrap_background_x(-100.0, 1280.0), 1180.0);
    assert_eq!(wrap_background_x(1300.0, 1280.0), 20.0);
    assert_eq!(wrap_background_x(-2560.0, 1280.0), 0.0);
    assert_eq!(wrap_background_x(42.0, 0.0), 42.0);
    assert_eq!(background_size(1280.0, 720.0).x, 3840.0);
}

fn pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> &[u8] {
    let start = ((y * width + x) * 4) as usize;
    &pixels[start..start + 4]
}

#[test]
fn test_curtain_tile_has_visible_folds() {
    let (width, height) = (320, 8);
    let pixels = curtain_pattern(width, height, [0.5, 0.2, 0.3]);
    assert_eq!(pixels.len(), (width * height * 4) as usize);

    // Fold ridge at x=0, trough half a fold later
    let ridge = pixel(&pixels, width, 0, 0);
    let trough = pixel(&pixels, width, 40, 0);
    assert!(ridge[0] > trough[0] + 40);
    assert_eq!(ridge[3], 255);

    // Darker towards the floor
    assert!(pixel(&pixels, width, 0, height - 1)[0] < ridge[0]);
}

#[test]
fn test_curtain_tile_repeats_without_seam() {
    let width = 1280;
    let pixels = curtain_pattern(width, 1, [0.12, 0.10, 0.16]);
    let first = pixel(&pixels, width, 0, 0);
    let last = pixel(&pixels, width, width - 1, 0);
    for channel in 0..3 {
        assert!(first[channel].abs_diff(last[channel]) <= 1);
    }
}

#[test]
fn test_stock_hands_out_batches_with_slots() {
    let mut stock = ShelfStock::default();
    stock.refill(["a", "b", "c", "d", "e"].map(entry));
    assert_eq!(stock.pending(), 5);

    let slots: Vec<(usize, String)> = stock
        .next_batch(2)
        .into_iter()
        .map(|(slot, e)| (slot, e.id))
        .collect();
    assert_eq!(slots, vec![(0, "a".to_string()), (1, "b".to_string())]);

    stock.next_batch(2);
    let last = stock.next_batch(2);
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].0, 4);
    assert_eq!(stock.pending(), 0);
    assert_eq!(stock.stocked(), 5);
    assert!(stock.next_batch(2).is_empty());
}

#[test]
fn test_refill_restarts_slots() {
    let mut stock = ShelfStock::default();
    stock.refill([entry("a"), entry("b")]);
    stock.next_batch(5);

    stock.refill([entry("c")]);
    let batch = stock.next_batch(5);
    assert_eq!(batch[0].0, 0);
    assert_eq!(stock.stocked(), 1);
}

// -----------------------------------------------------------------------------
// Details panel
// -----------------------------------------------------------------------------

fn card(id: &str, slot: usize) -> PosterCard {
    PosterCard {
        movie_id: id.to_string(),
        era: Era::Modern,
        slot,
    }
}

#[test]
fn test_nearest_card_to_centre() {
    let (a, b, c) = (card("a", 0), card("b", 1), card("c", 2));
    let nearest = nearest_to_centre([(&a, -300.0), (&b, 40.0), (&c, -25.0)]);
    assert_eq!(nearest.map(|c| c.movie_id.as_str()), Some("c"));

    // Equal distance goes to the lower slot
    let nearest = nearest_to_centre([(&c, 50.0), (&b, -50.0)]);
    assert_eq!(nearest.map(|c| c.slot), Some(1));

    assert!(nearest_to_centre(Vec::<(&PosterCard, f32)>::new()).is_none());
}

#[test]
fn test_details_text_lists_collection_fields() {
    let mut movie = entry("tt0088846");
    movie.title = "Brazil".to_string();
    movie.year = 1985;
    movie.director = "Terry Gilliam".to_string();
    movie.genre = vec!["Sci-Fi".to_string(), "Satire".to_string()];
    movie.runtime = Some("142 min".to_string());
    movie.rating = Some(7.9);
    movie.format = Some("Blu-ray".to_string());
    movie.audio_quality = Some("Stereo".to_string());
    movie.purchased_at = Some("2021-03-09".to_string());
    movie.tags = vec!["criterion".to_string()];
    movie.notes = Some("Director's cut".to_string());
    movie.plot = Some("A clerk dreams of escape.".to_string());

    let text = details_text(&movie, &card("tt0088846", 3));
    for expected in [
        "Brazil (1985)",
        "Directed by Terry Gilliam",
        "Modern era, shelf slot 4",
        "Runtime: 142 min",
        "Genre: Sci-Fi, Satire",
        "Rating: 7.9/10",
        "Format: Blu-ray",
        "Audio: Stereo",
        "Purchased: 2021-03-09",
        "Not watched yet",
        "Tags: criterion",
        "Notes: Director's cut",
        "\n\nA clerk dreams of escape.",
    ] {
        assert!(text.contains(expected), "{expected:?} missing from {text:?}");
    }
}

#[test]
fn test_details_text_skips_unset_fields() {
    let mut movie = entry("x");
    movie.watched = true;
    let text = details_text(&movie, &card("x", 0));
    assert!(text.ends_with("\nWatched"));
    for absent in ["Runtime", "Genre", "Rating", "Format", "Audio", "Tags", "Notes"] {
        assert!(!text.contains(absent), "unexpected {absent} in {text:?}");
    }
}

fn panel_text(app: &mut App) -> String {
    app.world_mut()
        .query_filtered::<&Text, With<DetailsPanel>>()
        .iter(app.world())
        .map(|text| text.0.clone())
        .collect()
}

#[test]
fn test_panel_follows_centred_poster() {
    let mut app = App::new();
    app.insert_resource(MovieCollection {
        entries: vec![entry("a"), entry("b")],
    })
    .add_systems(Update, update_details_panel);
    app.world_mut().spawn((DetailsPanel::default(), Text::new("")));
    let first = app
        .world_mut()
        .spawn((card("a", 0), Transform::from_xyz(-10.0, 0.0, 0.0)))
        .id();
    app.world_mut()
        .spawn((card("b", 1), Transform::from_xyz(180.0, 0.0, 0.0)));

    app.update();
    assert!(panel_text(&mut app).starts_with("A (2000)"));

    // Scrolled one poster to the left
    app.world_mut()
        .entity_mut(first)
        .get_mut::<Transform>()
        .unwrap()
        .translation
        .x = -200.0;
    app.update();
    assert!(panel_text(&mut app).starts_with("B (2000)"));
}
