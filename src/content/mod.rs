//! Content domain: collection and settings data loaded from RON files.

mod data;
mod loader;
mod validation;


pub use data::*;
pub use loader::{load_collection, load_settings};
pub use validation::{retain_valid, validate_collection, validate_settings};

use bevy::prelude::*;
use std::path::Path;

use crate::core::ShelfState;

/// Directory holding settings.ron and collection.ron.
pub const DATA_DIR: &str = "assets/data";

/// Valid collection entries in shelf order.
#[derive(Resource, Debug, Default)]
pub struct MovieCollection {
    pub entries: Vec<MovieEntry>,
}

impl MovieCollection {
    pub fn watched_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.watched).count()
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ShelfSettings>()
            .register_type::<MovieEntry>()
            .add_systems(OnEnter(ShelfState::Boot), load_shelf_content);
    }
}

fn load_shelf_content(mut commands: Commands) {
    let base_path = Path::new(DATA_DIR);
    let settings = settings_or_default(&base_path.join("settings.ron"));
    let collection = collection_or_empty(&base_path.join("collection.ron"));

    info!(
        "Loaded collection: {} movies ({} watched)",
        collection.entries.len(),
        collection.watched_count()
    );

    commands.insert_resource(settings);
    commands.insert_resource(collection);
}

/// Load settings, falling back to defaults when the file is missing,
/// malformed or out of range.
pub fn settings_or_default(path: &Path) -> ShelfSettings {
    let settings = match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}, using default shelf settings", e);
            return ShelfSettings::default();
        }
    };

    let errors = validate_settings(&settings);
    if errors.is_empty() {
        settings
    } else {
        for error in &errors {
            warn!("{}", error);
        }
        warn!("Shelf settings invalid, using defaults");
        ShelfSettings::default()
    }
}

/// Load the collection, dropping invalid entries. A missing or malformed
/// file yields an empty shelf.
pub fn collection_or_empty(path: &Path) -> MovieCollection {
    let entries = match load_collection(path) {
        Ok(entries) => entries,
        Err(e) => {
            error!("{}", e);
            return MovieCollection::default();
        }
    };

    let errors = validate_collection(&entries);
    for error in &errors {
        warn!("{}", error);
    }
    let total = entries.len();
    let entries = retain_valid(entries, &errors);
    if entries.len() < total {
        warn!("Skipped {} invalid collection entries", total - entries.len());
    }

    MovieCollection { entries }
}
