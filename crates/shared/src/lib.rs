use serde::{Deserialize, Serialize};

/// Panel label as produced by the cabinet generator ("Left Side", "Shelf 2", ...).
/// Labels are not unique across cabinets.
pub type PanelLabel = String;

/// One rectangular cabinet part: box extents plus the position of its center
/// in model-space units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    pub label: PanelLabel,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PanelRecord {
    pub fn new(label: impl Into<String>, size: [f64; 3], center: [f64; 3]) -> Self {
        Self {
            label: label.into(),
            width: size[0],
            height: size[1],
            depth: size[2],
            x: center[0],
            y: center[1],
            z: center[2],
        }
    }

    /// Center position [x, y, z]
    pub fn center(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Full extents [width, height, depth]
    pub fn size(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// Minimum corner (center minus half extents)
    pub fn min_corner(&self) -> [f64; 3] {
        [
            self.x - self.width * 0.5,
            self.y - self.height * 0.5,
            self.z - self.depth * 0.5,
        ]
    }

    /// Maximum corner (center plus half extents)
    pub fn max_corner(&self) -> [f64; 3] {
        [
            self.x + self.width * 0.5,
            self.y + self.height * 0.5,
            self.z + self.depth * 0.5,
        ]
    }
}

/// Parse a panel list from JSON (an array of panel objects).
pub fn panels_from_json(json: &str) -> Result<Vec<PanelRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
