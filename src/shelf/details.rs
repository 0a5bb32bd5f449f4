//! Shelf domain: details panel for the poster closest to the view centre.

use bevy::prelude::*;

use crate::content::{MovieCollection, MovieEntry};
use crate::core::GalleryScoped;
use crate::shelf::PosterCard;

/// Text panel describing the centred poster.
#[derive(Component, Debug, Default)]
pub struct DetailsPanel {
    /// Movie id currently shown.
    pub shown: Option<String>,
}

/// Card whose x is closest to the view centre. Equal distances go to the
/// lower slot.
pub fn nearest_to_centre<'a>(
    cards: impl IntoIterator<Item = (&'a PosterCard, f32)>,
) -> Option<&'a PosterCard> {
    cards
        .into_iter()
        .min_by(|(a, ax), (b, bx)| {
            ax.abs()
                .total_cmp(&bx.abs())
                .then_with(|| a.slot.cmp(&b.slot))
        })
        .map(|(card, _)| card)
}

fn push_line(text: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        text.push_str(&format!("\n{label}: {value}"));
    }
}

/// Panel text for one entry. Unset optional fields are left out.
pub fn details_text(entry: &MovieEntry, card: &PosterCard) -> String {
    let mut text = format!(
        "{} ({})\nDirected by {}\n{} era, shelf slot {}",
        entry.title,
        entry.year,
        entry.director,
        card.era.label(),
        card.slot + 1
    );

    push_line(&mut text, "Runtime", entry.runtime.as_deref());
    if !entry.genre.is_empty() {
        push_line(&mut text, "Genre", Some(entry.genre.join(", ").as_str()));
    }
    if let Some(rating) = entry.rating {
        push_line(&mut text, "Rating", Some(format!("{rating:.1}/10").as_str()));
    }
    push_line(&mut text, "Format", entry.format.as_deref());
    push_line(&mut text, "Audio", entry.audio_quality.as_deref());
    push_line(&mut text, "Purchased", entry.purchased_at.as_deref());
    text.push_str(if entry.watched {
        "\nWatched"
    } else {
        "\nNot watched yet"
    });
    if !entry.tags.is_empty() {
        push_line(&mut text, "Tags", Some(entry.tags.join(", ").as_str()));
    }
    push_line(&mut text, "Notes", entry.notes.as_deref());
    if let Some(plot) = entry.plot.as_deref().filter(|p| !p.is_empty()) {
        text.push_str("\n\n");
        text.push_str(plot);
    }
    text
}

pub(crate) fn spawn_details_panel(mut commands: Commands) {
    commands.spawn((
        DetailsPanel::default(),
        GalleryScoped,
        Text::new(""),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.92, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            bottom: Val::Px(16.0),
            max_width: Val::Px(360.0),
            padding: UiRect::all(Val::Px(10.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.04, 0.08, 0.8)),
        ZIndex(400),
    ));
}

pub(crate) fn update_details_panel(
    collection: Res<MovieCollection>,
    cards: Query<(&PosterCard, &Transform)>,
    mut panels: Query<(&mut DetailsPanel, &mut Text)>,
) {
    let Ok((mut panel, mut text)) = panels.single_mut() else {
        return;
    };

    let nearest = nearest_to_centre(
        cards
            .iter()
            .map(|(card, transform)| (card, transform.translation.x)),
    );
    let shown = nearest.map(|card| card.movie_id.as_str());
    if panel.shown.as_deref() == shown {
        return;
    }

    **text = nearest
        .and_then(|card| {
            let entry = collection.entries.iter().find(|e| e.id == card.movie_id)?;
            Some(details_text(entry, card))
        })
        .unwrap_or_default();
    panel.shown = shown.map(str::to_string);
}
