//! Viewer settings

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::layout::explode::DEFAULT_EXPLODE_DISTANCE;

/// Camera and orbit-controller settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Camera distance as a multiple of the assembly's largest extent
    pub frame_distance_factor: f32,
    /// Azimuth used when framing an assembly (radians)
    pub frame_yaw: f32,
    /// Elevation used when framing an assembly (radians)
    pub frame_pitch: f32,
    /// Share of pending orbit motion applied per 60 Hz frame (0..1]
    pub damping_factor: f32,
    /// Degrees of rotation per pixel dragged
    pub rotate_speed: f32,
    /// Minimum orbit distance
    pub min_distance: f32,
    /// Maximum orbit distance
    pub max_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 5000.0,
            frame_distance_factor: 2.0,
            frame_yaw: 0.6,
            frame_pitch: 0.45,
            damping_factor: 0.1,
            rotate_speed: 0.5,
            min_distance: 1.0,
            max_distance: 2000.0,
        }
    }
}

/// Material and background appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Material opacity while wireframe mode is on
    pub wireframe_opacity: f32,
    /// Emissive color of the selected panel
    pub highlight_emissive: [u8; 3],
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 32, 36],
            wireframe_opacity: 0.35,
            highlight_emissive: [68, 68, 255],
        }
    }
}

/// All viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Base explode offset (model units)
    pub explode_distance: f32,
    pub camera: CameraSettings,
    pub appearance: AppearanceSettings,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            explode_distance: DEFAULT_EXPLODE_DISTANCE,
            camera: CameraSettings::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

impl ViewerSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from the platform config directory, or return defaults
    /// if the file is absent or unreadable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(dirs) = directories::ProjectDirs::from("com", "cabinet-viewer", "cabinet-viewer")
        else {
            return Self::default();
        };
        let config_path = dirs.config_dir().join("settings.json");
        let Ok(json) = std::fs::read_to_string(&config_path) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", config_path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid settings file {}: {e}", config_path.display());
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
