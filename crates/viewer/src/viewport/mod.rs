//! Camera, geometry and ray picking for the 3D viewport

pub mod camera;
pub mod mesh;
pub mod picking;

use serde::{Deserialize, Serialize};

/// Measured size of the host container in CSS/logical pixels, plus the
/// device pixel ratio used for the render surface's backing store.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
}

fn default_pixel_ratio() -> f32 {
    1.0
}

impl ContainerSize {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Width / height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Positive, finite extents (a collapsed or hidden container is not)
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Backing-store size in physical pixels
    pub fn physical(&self) -> (u32, u32) {
        let ratio = if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        };
        (
            (self.width * ratio).round().max(1.0) as u32,
            (self.height * ratio).round().max(1.0) as u32,
        )
    }
}
