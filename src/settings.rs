//! Persisted runtime settings
//!
//! Loaded from a JSON file next to the binary, with every field optional
//! and defaulted; command line flags override on top (see main.rs).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::display::{DEFAULT_HEIGHT, DEFAULT_PIXEL_SIZE, DEFAULT_WIDTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    /// Window pixels per buffer pixel (the render buffer is the window
    /// size divided by this)
    pub pixel_size: u32,
    pub vsync: bool,
    /// Path of the cube texture image
    pub texture: String,
    /// Cube edge length in buffer pixels (before camera zoom)
    pub cube_scale: f32,
    pub camera_pitch: f32,
    pub camera_zoom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pixel_size: DEFAULT_PIXEL_SIZE,
            vsync: true,
            texture: "bricks.png".to_string(),
            cube_scale: 64.0,
            camera_pitch: 5.5,
            camera_zoom: 1.0,
        }
    }
}

impl Settings {
    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}
