//! Scroll domain: pressed-key bookkeeping for the shelf controls.

use bevy::input::keyboard::Key;
use std::collections::HashMap;

/// Logical control a key maps to while browsing the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollControl {
    Left,
    Right,
}

impl ScrollControl {
    /// Map a logical key to a shelf control.
    ///
    /// Only the arrow keys and lowercase `a`/`d` count; `A`/`D` (shifted)
    /// are ordinary characters.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(Self::Left),
            Key::ArrowRight => Some(Self::Right),
            Key::Character(c) => match c.as_str() {
                "a" => Some(Self::Left),
                "d" => Some(Self::Right),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Pressed flag per logical key.
///
/// Entries are never removed; a released key is stored as `false`.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    keys: HashMap<Key, bool>,
}

impl KeyState {
    pub fn press(&mut self, key: Key) {
        self.keys.insert(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.insert(key, false);
    }

    pub fn is_pressed(&self, key: &Key) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Mark every known key as released.
    pub fn release_all(&mut self) {
        for pressed in self.keys.values_mut() {
            *pressed = false;
        }
    }

    /// Whether any key mapped to `control` is currently held.
    pub fn control_held(&self, control: ScrollControl) -> bool {
        self.keys
            .iter()
            .any(|(key, pressed)| *pressed && ScrollControl::from_key(key) == Some(control))
    }

    pub fn held_count(&self) -> usize {
        self.keys.values().filter(|pressed| **pressed).count()
    }
}
