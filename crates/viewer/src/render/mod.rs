//! Seam between the viewer and whatever actually draws pixels

mod snapshot;

pub use snapshot::{FrameSnapshot, NodeSnapshot, SnapshotSurface, SurfaceLog};

use crate::error::ViewerError;
use crate::scene::SceneNode;
use crate::viewport::camera::OrbitCamera;
use crate::viewport::ContainerSize;

/// Everything a surface needs to draw one frame
pub struct RenderFrame<'a> {
    pub camera: &'a OrbitCamera,
    pub nodes: &'a [SceneNode],
    pub size: ContainerSize,
    pub background: [u8; 3],
}

/// A render target bound to the host container (GPU context, canvas, painter).
///
/// The viewer drives it: `init` once at mount, `resize` when the container is
/// measured, `draw` once per tick and `dispose` at unmount.
pub trait RenderSurface {
    /// Acquire the underlying context. Failure makes the viewer unusable.
    fn init(&mut self, size: ContainerSize) -> Result<(), ViewerError>;

    fn resize(&mut self, size: ContainerSize);

    fn draw(&mut self, frame: &RenderFrame<'_>);

    /// Release every resource held by the surface.
    fn dispose(&mut self);
}
