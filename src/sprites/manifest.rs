//! Sprite manifest loading.
//!
//! Loads the sprite manifest JSON which lists the sprite sheets, their
//! frame counts, frame sizes and playback speed.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Path of the manifest, relative to the working directory.
pub const MANIFEST_PATH: &str = "assets/sprites/manifest.json";

/// Directory sheet paths are relative to.
pub const ASSET_ROOT: &str = "assets";

/// Resource containing all loaded sprite sheet definitions.
#[derive(Resource, Default)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of sheet keys to their definitions.
    pub sheets: HashMap<String, SpriteSheetDef>,
    /// Loaded texture handles, keyed by sheet key.
    pub textures: HashMap<String, Handle<Image>>,
}

/// Definition of a single sprite sheet laid out as a grid.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteSheetDef {
    /// Path to the sheet image, relative to assets/.
    pub path: String,
    /// Number of animation frames.
    pub frames: u32,
    /// Width and height of one frame in pixels.
    pub size: u32,
    /// Frames per row in the sheet.
    pub columns: u32,
    /// Seconds each frame is shown.
    #[serde(default = "default_frame_duration")]
    pub frame_duration: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// World position of the sprite centre.
    #[serde(default)]
    pub anchor: Option<Vec2Def>,
}

fn default_frame_duration() -> f32 {
    0.1
}

fn default_scale() -> f32 {
    1.0
}

impl SpriteSheetDef {
    pub fn rows(&self) -> u32 {
        self.frames.div_ceil(self.columns.max(1))
    }
}

/// Serializable Vec2 for JSON.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    sheets: HashMap<String, SpriteSheetDef>,
}

impl SpriteManifest {
    /// Parse manifest JSON without loading any textures.
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        let manifest_json: ManifestJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: manifest_json.version,
            sheets: manifest_json.sheets,
            textures: HashMap::new(),
        })
    }

    /// Load the manifest from a JSON file and start loading its textures.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, using empty manifest",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return;
            }
        };

        let parsed = match Self::parse(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sprite manifest: {}", e);
                return;
            }
        };

        self.version = parsed.version;
        self.sheets = parsed.sheets;

        let missing = self.missing_textures(Path::new(ASSET_ROOT));
        for (key, def) in &self.sheets {
            if missing.contains(key) {
                warn!(
                    "Sprite sheet '{}' image {:?} not found, it will use a placeholder",
                    key, def.path
                );
                continue;
            }
            let handle = asset_server.load(&def.path);
            self.textures.insert(key.clone(), handle);
        }

        info!(
            "Loaded sprite manifest v{} with {} sheets",
            self.version,
            self.sheets.len()
        );
    }

    /// Keys of sheets whose image file is absent under `asset_root`.
    pub fn missing_textures(&self, asset_root: &Path) -> Vec<String> {
        let mut missing: Vec<String> = self
            .sheets
            .iter()
            .filter(|(_, def)| !asset_root.join(&def.path).is_file())
            .map(|(key, _)| key.clone())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Get both definition and texture for a sheet.
    pub fn get_sheet(&self, key: &str) -> Option<(&SpriteSheetDef, Handle<Image>)> {
        let def = self.sheets.get(key)?;
        let texture = self.textures.get(key)?;
        Some((def, texture.clone()))
    }
}
