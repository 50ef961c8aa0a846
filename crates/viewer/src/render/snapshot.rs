//! Headless surface that records frames as plain data
//!
//! Used by the browser bindings (JavaScript draws from the snapshot) and by
//! tests.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{RenderFrame, RenderSurface};
use crate::error::ViewerError;
use crate::viewport::ContainerSize;

/// One drawable box as seen by the last frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub label: String,
    pub geometry_id: u64,
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub color: [u8; 3],
    pub emissive: [u8; 3],
    pub highlighted: bool,
    pub wireframe: bool,
    pub transparent: bool,
    pub opacity: f32,
}

/// Camera plus every node of one drawn frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub aspect: f32,
    /// Canvas backing-store size in device pixels
    pub backing_size: [u32; 2],
    pub background: [u8; 3],
    pub nodes: Vec<NodeSnapshot>,
}

impl FrameSnapshot {
    pub fn capture(frame: &RenderFrame<'_>, index: u64) -> Self {
        Self {
            frame: index,
            eye: frame.camera.eye_position().to_array(),
            target: frame.camera.target.to_array(),
            fov_degrees: frame.camera.fov.to_degrees(),
            aspect: frame.camera.aspect,
            backing_size: {
                let (w, h) = frame.size.physical();
                [w, h]
            },
            background: frame.background,
            nodes: frame
                .nodes
                .iter()
                .map(|n| {
                    let m = n.material();
                    NodeSnapshot {
                        label: n.label().to_string(),
                        geometry_id: n.geometry().id,
                        position: n.position.to_array(),
                        size: n.geometry().size.to_array(),
                        color: m.color,
                        emissive: m.emissive,
                        highlighted: m.highlighted,
                        wireframe: m.wireframe,
                        transparent: m.transparent,
                        opacity: m.opacity,
                    }
                })
                .collect(),
        }
    }
}

/// What a [`SnapshotSurface`] has seen so far
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub size: Option<ContainerSize>,
    /// Backing-store size for the current container, in device pixels
    pub backing_size: Option<(u32, u32)>,
    pub frames_drawn: u64,
    pub last_frame: Option<FrameSnapshot>,
    pub disposed: bool,
}

/// Surface that keeps the last frame instead of rasterizing it.
///
/// The log is shared so it stays readable after the viewer (and with it the
/// surface) is gone.
#[derive(Default)]
pub struct SnapshotSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl SnapshotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<SurfaceLog>> {
        Rc::clone(&self.log)
    }
}

impl RenderSurface for SnapshotSurface {
    fn init(&mut self, size: ContainerSize) -> Result<(), ViewerError> {
        let mut log = self.log.borrow_mut();
        if log.disposed {
            return Err(ViewerError::SurfaceUnavailable("surface already disposed".into()));
        }
        log.size = Some(size);
        log.backing_size = Some(size.physical());
        Ok(())
    }

    fn resize(&mut self, size: ContainerSize) {
        let mut log = self.log.borrow_mut();
        log.size = Some(size);
        log.backing_size = Some(size.physical());
    }

    fn draw(&mut self, frame: &RenderFrame<'_>) {
        let mut log = self.log.borrow_mut();
        log.frames_drawn += 1;
        log.last_frame = Some(FrameSnapshot::capture(frame, log.frames_drawn));
    }

    fn dispose(&mut self) {
        let mut log = self.log.borrow_mut();
        log.disposed = true;
        log.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNode;
    use crate::state::settings::CameraSettings;
    use crate::viewport::camera::OrbitCamera;

    #[test]
    fn test_backing_size_follows_pixel_ratio() {
        let mut surface = SnapshotSurface::new();
        surface.init(ContainerSize::new(400.0, 300.0, 2.0)).unwrap();
        assert_eq!(surface.log().borrow().backing_size, Some((800, 600)));

        surface.resize(ContainerSize::new(301.0, 200.0, 1.5));
        assert_eq!(surface.log().borrow().backing_size, Some((452, 300)));

        let camera = OrbitCamera::new(&CameraSettings::default());
        let nodes: [SceneNode; 0] = [];
        surface.draw(&RenderFrame {
            camera: &camera,
            nodes: &nodes,
            size: ContainerSize::new(301.0, 200.0, 1.5),
            background: [0, 0, 0],
        });
        let log = surface.log();
        assert_eq!(log.borrow().last_frame.as_ref().unwrap().backing_size, [452, 300]);
    }

    #[test]
    fn test_init_after_dispose_fails() {
        let mut surface = SnapshotSurface::new();
        surface.dispose();
        assert!(matches!(
            surface.init(ContainerSize::new(10.0, 10.0, 1.0)),
            Err(ViewerError::SurfaceUnavailable(_))
        ));
    }
}
