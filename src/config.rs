use std::fs;
use std::path::Path;

use egui::{Color32, Key, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SHAPE_GROUPS_CONFIG";

/// A shape created at startup. Positions are always random.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Rectangle { width: f32, height: f32, fill: [u8; 3] },
    Circle { radius: f32, fill: [u8; 3] },
}

impl ShapeSpec {
    /// Size of the shape's bounding box
    pub fn size(&self) -> Vec2 {
        match self {
            ShapeSpec::Rectangle { width, height, .. } => Vec2::new(*width, *height),
            ShapeSpec::Circle { radius, .. } => Vec2::splat(radius * 2.0),
        }
    }

    pub fn fill(&self) -> Color32 {
        let [r, g, b] = match self {
            ShapeSpec::Rectangle { fill, .. } | ShapeSpec::Circle { fill, .. } => *fill,
        };
        Color32::from_rgb(r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the built-in board
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub background: [u8; 3],
    /// Pressed together with Ctrl/Cmd to group the selection
    pub group_key: String,
    /// Pressed together with Ctrl/Cmd to ungroup the selection
    pub ungroup_key: String,
    pub shapes: Vec<ShapeSpec>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let black = [0, 0, 0];
        Self {
            title: "Shape Groups - Composite Drag and Drop".to_owned(),
            window_size: [800.0, 600.0],
            background: [128, 128, 128],
            group_key: "G".to_owned(),
            ungroup_key: "U".to_owned(),
            shapes: vec![
                ShapeSpec::Rectangle { width: 20.0, height: 20.0, fill: black },
                ShapeSpec::Rectangle { width: 20.0, height: 20.0, fill: black },
                ShapeSpec::Rectangle { width: 20.0, height: 20.0, fill: black },
                ShapeSpec::Circle { radius: 35.0, fill: black },
            ],
        }
    }
}

impl AppConfig {
    /// Load the config named by `SHAPE_GROUPS_CONFIG`, or the defaults when unset
    pub fn load() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::from_path(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check sizes and shortcut names
    pub fn validate(&self) -> ConfigResult<()> {
        let [w, h] = self.window_size;
        if !(is_usable_length(w) && is_usable_length(h)) {
            return Err(ConfigError::Invalid(format!(
                "window size must be finite and positive, got {w}x{h}"
            )));
        }
        for (index, spec) in self.shapes.iter().enumerate() {
            let size = spec.size();
            if !(is_usable_length(size.x) && is_usable_length(size.y)) {
                return Err(ConfigError::Invalid(format!(
                    "shape {index} must have a finite, positive size"
                )));
            }
        }
        self.shortcuts()?;
        Ok(())
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_size[0], self.window_size[1])
    }

    pub fn background(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    /// Resolve the group/ungroup key names
    pub fn shortcuts(&self) -> ConfigResult<Shortcuts> {
        Ok(Shortcuts {
            group: parse_key(&self.group_key)?,
            ungroup: parse_key(&self.ungroup_key)?,
        })
    }
}

// Oversized JSON numbers parse to infinity
fn is_usable_length(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn parse_key(name: &str) -> ConfigResult<Key> {
    Key::from_name(name).ok_or_else(|| ConfigError::UnknownKey(name.to_owned()))
}

/// Keyboard shortcuts for grouping, each combined with Ctrl/Cmd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcuts {
    pub group: Key,
    pub ungroup: Key,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            group: Key::G,
            ungroup: Key::U,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let config = AppConfig::default();
        assert_eq!(config.window_size(), Vec2::new(800.0, 600.0));
        assert_eq!(config.shapes.len(), 4);
        assert_eq!(config.shortcuts().unwrap(), Shortcuts::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json_str(r#"{ "title": "Board", "group_key": "K" }"#).unwrap();
        assert_eq!(config.title, "Board");
        assert_eq!(config.shortcuts().unwrap().group, Key::K);
        assert_eq!(config.shortcuts().unwrap().ungroup, Key::U);
        assert_eq!(config.shapes, AppConfig::default().shapes);
    }

    #[test]
    fn test_tagged_shapes() {
        let json = r#"{
            "shapes": [
                { "kind": "rectangle", "width": 10, "height": 30, "fill": [255, 0, 0] },
                { "kind": "circle", "radius": 5, "fill": [0, 0, 255] }
            ]
        }"#;
        let config = AppConfig::from_json_str(json).unwrap();
        assert_eq!(config.shapes[0].size(), Vec2::new(10.0, 30.0));
        assert_eq!(config.shapes[0].fill(), Color32::from_rgb(255, 0, 0));
        assert_eq!(config.shapes[1].size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = AppConfig::from_json_str(r#"{ "ungroup_key": "NotAKey" }"#);
        assert!(matches!(result, Err(ConfigError::UnknownKey(name)) if name == "NotAKey"));
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let result = AppConfig::from_json_str(r#"{ "window_size": [0, 600] }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let json = r#"{ "shapes": [ { "kind": "circle", "radius": -1, "fill": [0, 0, 0] } ] }"#;
        assert!(matches!(AppConfig::from_json_str(json), Err(ConfigError::Invalid(_))));

        let result = AppConfig::from_json_str(r#"{ "window_size": [1e39, 600] }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let json = r#"{
            "shapes": [ { "kind": "rectangle", "width": 1e39, "height": 20, "fill": [0, 0, 0] } ]
        }"#;
        assert!(matches!(AppConfig::from_json_str(json), Err(ConfigError::Invalid(_))));

        // Finite radius whose diameter overflows
        let json = r#"{ "shapes": [ { "kind": "circle", "radius": 3e38, "fill": [0, 0, 0] } ] }"#;
        assert!(matches!(AppConfig::from_json_str(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(AppConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::from_path("/definitely/not/here/config.json");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
