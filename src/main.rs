mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod scroll;
mod shelf;
mod sprites;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Reel Shelf".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            // Browser defaults can only be blocked for all keys or none, so
            // web builds keep every default, arrow-key page scroll included.
            // Inside the app, shelf keys are hidden from later systems by
            // clearing their just-pressed state instead.
            prevent_default_event_handling: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        scroll::ScrollPlugin,
        shelf::ShelfPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
