//! Validation for collection entries and shelf settings.

use std::collections::HashSet;

use super::data::*;

/// Earliest year a film entry may carry.
pub const FIRST_FILM_YEAR: i32 = 1888;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    /// Position in the source list, when the source is a list item.
    pub index: Option<usize>,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for pushing an error when a check fails
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $index:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                index: $index,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate every collection entry.
/// Returns a list of validation errors, empty if all entries are valid.
pub fn validate_collection(entries: &[MovieEntry]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let id = if entry.id.trim().is_empty() {
            format!("#{}", index)
        } else {
            entry.id.clone()
        };

        check!(
            errors,
            !entry.id.trim().is_empty(),
            "Movie",
            id,
            Some(index),
            "id",
            "id is empty"
        );
        check!(
            errors,
            entry.id.trim().is_empty() || seen_ids.insert(entry.id.as_str()),
            "Movie",
            id,
            Some(index),
            "id",
            "duplicate id"
        );
        check!(
            errors,
            !entry.title.trim().is_empty(),
            "Movie",
            id,
            Some(index),
            "title",
            "title is empty"
        );
        check!(
            errors,
            entry.year >= FIRST_FILM_YEAR,
            "Movie",
            id,
            Some(index),
            "year",
            "{} is before {}",
            entry.year,
            FIRST_FILM_YEAR
        );
        if let Some(rating) = entry.rating {
            check!(
                errors,
                (0.0..=10.0).contains(&rating),
                "Movie",
                id,
                Some(index),
                "rating",
                "{} is outside 0-10",
                rating
            );
        }
    }

    errors
}

/// Drop entries that have any validation error, keeping order.
///
/// For duplicate ids only the later occurrences carry an error, so the
/// first one survives.
pub fn retain_valid(entries: Vec<MovieEntry>, errors: &[ValidationError]) -> Vec<MovieEntry> {
    let rejected: HashSet<usize> = errors.iter().filter_map(|e| e.index).collect();
    entries
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !rejected.contains(index))
        .map(|(_, entry)| entry)
        .collect()
}

/// Validate shelf settings ranges.
pub fn validate_settings(settings: &ShelfSettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "settings";

    check!(
        errors,
        settings.scroll_step > 0,
        "Settings",
        id,
        None,
        "scroll_step",
        "{} must be positive",
        settings.scroll_step
    );
    check!(
        errors,
        (0.0..=1.0).contains(&settings.parallax_factor),
        "Settings",
        id,
        None,
        "parallax_factor",
        "{} is outside 0-1",
        settings.parallax_factor
    );
    check!(
        errors,
        settings.poster_spacing > 0.0,
        "Settings",
        id,
        None,
        "poster_spacing",
        "{} must be positive",
        settings.poster_spacing
    );
    check!(
        errors,
        settings.poster_width > 0.0 && settings.poster_height > 0.0,
        "Settings",
        id,
        None,
        "poster_width/poster_height",
        "poster size must be positive"
    );
    check!(
        errors,
        settings.posters_per_frame > 0,
        "Settings",
        id,
        None,
        "posters_per_frame",
        "must stock at least one poster per frame"
    );
    check!(
        errors,
        settings.background.tile_width > 0.0,
        "Settings",
        id,
        None,
        "background.tile_width",
        "{} must be positive",
        settings.background.tile_width
    );

    errors
}
