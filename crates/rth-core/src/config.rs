//! Handle settings
//!
//! Everything a host may want to tune without code: keyboard shortcuts,
//! colors, defaults for newly created handles and picking limits. Settings
//! round-trip through RON files.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AUTO_SCALE_PIXELS, GLOBAL_HANDLE_COLOR, HANDLE_LAYER, HANDLE_SCALE_MAX,
    HANDLE_SCALE_MIN, HIGHLIGHT_COLOR, LINKED_COLOR, MAX_RAYCAST_HITS, RAYCAST_MAX_DISTANCE,
    X_AXIS_COLOR, Y_AXIS_COLOR, Z_AXIS_COLOR,
};
use crate::input::{KeyCode, PointerButton};
use crate::snap::SnappingType;
use crate::types::{Axis, HandleAxes, HandleType, Space};
use crate::Color;

/// Keyboard shortcuts applied to every live handle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShortcutSettings {
    pub enabled: bool,
    pub position: KeyCode,
    pub rotation: KeyCode,
    pub scale: KeyCode,
    pub all: KeyCode,
    pub space_toggle: KeyCode,
    pub pivot_toggle: KeyCode,
}

impl Default for ShortcutSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            position: KeyCode::new('W'),
            rotation: KeyCode::new('E'),
            scale: KeyCode::new('R'),
            all: KeyCode::new('A'),
            space_toggle: KeyCode::new('X'),
            pivot_toggle: KeyCode::new('Z'),
        }
    }
}

/// Interactor colors and handle size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Color of the hovered or dragged interactor
    pub highlight_color: Color,
    pub x_axis_color: Color,
    pub y_axis_color: Color,
    pub z_axis_color: Color,
    /// Color of the uniform scale control
    pub global_color: Color,
    /// Color of scale axes while uniform scale is dragged
    pub linked_color: Color,
    /// Multiplier on the gizmo size, clamped to 0.1..=10
    pub handle_scale: f32,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            highlight_color: HIGHLIGHT_COLOR,
            x_axis_color: X_AXIS_COLOR,
            y_axis_color: Y_AXIS_COLOR,
            z_axis_color: Z_AXIS_COLOR,
            global_color: GLOBAL_HANDLE_COLOR,
            linked_color: LINKED_COLOR,
            handle_scale: 1.0,
        }
    }
}

impl AppearanceSettings {
    pub fn axis_color(&self, axis: Axis) -> Color {
        match axis {
            Axis::X => self.x_axis_color,
            Axis::Y => self.y_axis_color,
            Axis::Z => self.z_axis_color,
        }
    }

    pub fn clamped_handle_scale(&self) -> f32 {
        self.handle_scale.clamp(HANDLE_SCALE_MIN, HANDLE_SCALE_MAX)
    }
}

/// Initial configuration of newly created handles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandleDefaults {
    pub handle_type: HandleType,
    pub space: Space,
    pub axes: HandleAxes,
    pub snapping: SnappingType,
    /// Per-axis position increment, 0 disables
    pub position_snap: Vec3,
    /// Rotation increment in degrees, 0 disables
    pub rotation_snap: f32,
    /// Per-axis scale increment, 0 disables
    pub scale_snap: Vec3,
    /// Keep the gizmo at a constant size on screen
    pub auto_scale: bool,
    /// On-screen size in pixels when `auto_scale` is on
    pub auto_scale_pixels: f32,
}

impl Default for HandleDefaults {
    fn default() -> Self {
        Self {
            handle_type: HandleType::Position,
            space: Space::Local,
            axes: HandleAxes::XYZ,
            snapping: SnappingType::Relative,
            position_snap: Vec3::ZERO,
            rotation_snap: 0.0,
            scale_snap: Vec3::ZERO,
            auto_scale: true,
            auto_scale_pixels: DEFAULT_AUTO_SCALE_PIXELS,
        }
    }
}

/// Pick ray limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickingSettings {
    pub layer_mask: u32,
    pub max_distance: f32,
    pub max_hits: usize,
    pub pointer_button: PointerButton,
}

impl Default for PickingSettings {
    fn default() -> Self {
        Self {
            layer_mask: HANDLE_LAYER,
            max_distance: RAYCAST_MAX_DISTANCE,
            max_hits: MAX_RAYCAST_HITS,
            pointer_button: PointerButton::Primary,
        }
    }
}

/// Complete settings for a handle manager
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandleSettings {
    pub shortcuts: ShortcutSettings,
    pub appearance: AppearanceSettings,
    pub defaults: HandleDefaults,
    pub picking: PickingSettings,
}

impl HandleSettings {
    /// Clamp out-of-range values into their valid ranges
    pub fn sanitized(mut self) -> Self {
        self.appearance.handle_scale = self.appearance.clamped_handle_scale();
        self.defaults.auto_scale_pixels = self.defaults.auto_scale_pixels.max(1.0);
        self.defaults.rotation_snap = self.defaults.rotation_snap.max(0.0);
        self.defaults.position_snap = self.defaults.position_snap.max(Vec3::ZERO);
        self.defaults.scale_snap = self.defaults.scale_snap.max(Vec3::ZERO);
        self.picking.max_hits = self.picking.max_hits.max(1);
        self
    }

    /// Save settings to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load settings from a RON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        let settings: HandleSettings =
            ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(settings.sanitized())
    }

    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let settings: HandleSettings =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(settings.sanitized())
    }
}

/// Settings I/O errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shortcuts() {
        let s = HandleSettings::default();
        assert_eq!(s.shortcuts.position, KeyCode::new('w'));
        assert_eq!(s.shortcuts.pivot_toggle.as_char(), 'Z');
        assert!(s.defaults.auto_scale);
        assert_eq!(s.picking.max_hits, 16);
    }

    #[test]
    fn test_save_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handles.ron");

        let mut settings = HandleSettings::default();
        settings.defaults.handle_type = HandleType::Rotation;
        settings.defaults.rotation_snap = 15.0;
        settings.appearance.handle_scale = 2.0;
        settings.save(&path).unwrap();

        let loaded = HandleSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let data = b"(defaults: (rotation_snap: 45.0), appearance: (handle_scale: 50.0))";
        let loaded = HandleSettings::load_from_bytes(data).unwrap();
        assert_eq!(loaded.defaults.rotation_snap, 45.0);
        assert_eq!(loaded.defaults.handle_type, HandleType::Position);
        assert_eq!(loaded.shortcuts, ShortcutSettings::default());
        assert_eq!(loaded.appearance.handle_scale, HANDLE_SCALE_MAX);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            HandleSettings::load("/nonexistent/handles.ron"),
            Err(ConfigError::Io(_))
        ));
        assert!(matches!(
            HandleSettings::load_from_bytes(b"(shortcuts: oops"),
            Err(ConfigError::Deserialize(_))
        ));
    }
}
