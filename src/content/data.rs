//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron and are used for
//! deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scroll::ScrollTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Collection (collection.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MovieEntry {
    pub id: String,
    pub title: String,
    pub year: i32,
    #[serde(default = "unknown_director")]
    pub director: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub runtime: Option<String>,
    /// Poster image path, relative to assets/.
    #[serde(default)]
    pub poster: Option<String>,
    /// 0-10
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,

    // Physical collection fields
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub audio_quality: Option<String>,
    #[serde(default)]
    pub purchased_at: Option<String>,
    #[serde(default)]
    pub watched: bool,
}

fn unknown_director() -> String {
    "Unknown".to_string()
}

impl MovieEntry {
    pub fn era(&self) -> Era {
        Era::from_year(self.year)
    }

    /// Short label shown on placeholder posters.
    pub fn caption(&self) -> String {
        format!("{}\n({})", self.title, self.year)
    }
}

/// Film-history bucket used to tint placeholder posters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Era {
    Silent,
    Golden,
    Classic,
    Modern,
    Contemporary,
}

impl Era {
    pub fn from_year(year: i32) -> Self {
        if year < 1930 {
            Era::Silent
        } else if year < 1960 {
            Era::Golden
        } else if year < 1980 {
            Era::Classic
        } else if year < 2000 {
            Era::Modern
        } else {
            Era::Contemporary
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Era::Silent => "Silent",
            Era::Golden => "Golden age",
            Era::Classic => "Classic",
            Era::Modern => "Modern",
            Era::Contemporary => "Contemporary",
        }
    }

    pub fn tint(self) -> Color {
        match self {
            Era::Silent => Color::srgb(0.55, 0.55, 0.52),
            Era::Golden => Color::srgb(0.78, 0.64, 0.32),
            Era::Classic => Color::srgb(0.70, 0.36, 0.30),
            Era::Modern => Color::srgb(0.30, 0.45, 0.70),
            Era::Contemporary => Color::srgb(0.28, 0.62, 0.55),
        }
    }
}

// ============================================================================
// Shelf settings (settings.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ShelfSettings {
    pub schema_version: u32,
    /// Pixels per tick while a scroll key is held.
    pub scroll_step: i32,
    /// Background speed relative to the shelf.
    pub parallax_factor: f32,
    pub poster_width: f32,
    pub poster_height: f32,
    /// Distance between poster centres.
    pub poster_spacing: f32,
    /// x of the first poster centre.
    pub shelf_start_x: f32,
    /// y of the poster centres before jitter.
    pub shelf_y: f32,
    /// Posters spawned per frame while stocking.
    pub posters_per_frame: usize,
    pub layout_seed: u64,
    /// Maximum vertical jitter in pixels.
    pub max_jitter: f32,
    pub max_tilt_degrees: f32,
    pub background: BackgroundSettings,
}

impl Default for ShelfSettings {
    fn default() -> Self {
        let tuning = ScrollTuning::default();
        Self {
            schema_version: 1,
            scroll_step: tuning.step,
            parallax_factor: tuning.parallax_factor,
            poster_width: 150.0,
            poster_height: 220.0,
            poster_spacing: 190.0,
            shelf_start_x: -450.0,
            shelf_y: 40.0,
            posters_per_frame: 2,
            layout_seed: 0x5EE1_F11A,
            max_jitter: 6.0,
            max_tilt_degrees: 2.5,
            background: BackgroundSettings::default(),
        }
    }
}

impl ShelfSettings {
    pub fn scroll_tuning(&self) -> ScrollTuning {
        ScrollTuning {
            step: self.scroll_step,
            parallax_factor: self.parallax_factor,
        }
    }

    pub fn poster_size(&self) -> Vec2 {
        Vec2::new(self.poster_width, self.poster_height)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct BackgroundSettings {
    /// Tiled image, relative to assets/. A curtain tile in `color` is
    /// generated when unset.
    pub image: Option<String>,
    pub tile_width: f32,
    pub height: f32,
    pub color: [f32; 3],
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            image: None,
            tile_width: 1280.0,
            height: 720.0,
            color: [0.12, 0.10, 0.16],
        }
    }
}
