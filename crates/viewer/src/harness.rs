//! Headless test harness: a viewer mounted on a [`SnapshotSurface`].

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use shared::PanelRecord;

use crate::lifecycle::Viewer;
use crate::render::{FrameSnapshot, SnapshotSurface, SurfaceLog};
use crate::scene::{SceneNode, SyncOutcome};
use crate::state::settings::ViewerSettings;
use crate::viewport::ContainerSize;

/// Default container size used by the harness
pub const HARNESS_SIZE: ContainerSize = ContainerSize {
    width: 1280.0,
    height: 720.0,
    pixel_ratio: 1.0,
};

pub struct TestHarness {
    pub viewer: Viewer<SnapshotSurface>,
    log: Rc<RefCell<SurfaceLog>>,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_settings(ViewerSettings::default())
    }

    pub fn with_settings(settings: ViewerSettings) -> Self {
        let surface = SnapshotSurface::new();
        let log = surface.log();
        let viewer = match Viewer::mount(surface, HARNESS_SIZE, settings) {
            Ok(viewer) => viewer,
            Err(e) => panic!("snapshot surface cannot fail to mount: {e}"),
        };
        Self { viewer, log }
    }

    // ── Inputs ────────────────────────────────────────────────

    pub fn load(&mut self, panels: Vec<PanelRecord>) -> SyncOutcome {
        self.viewer.set_panels(panels)
    }

    pub fn explode(&mut self, on: bool) -> SyncOutcome {
        self.viewer.set_exploded(on)
    }

    pub fn wireframe(&mut self, on: bool) -> SyncOutcome {
        self.viewer.set_wireframe(on)
    }

    /// Click at container coordinates; returns the new selection.
    pub fn click(&mut self, x: f32, y: f32) -> Option<String> {
        self.viewer.handle_click(x, y).map(str::to_string)
    }

    /// Click on the projected center of the `index`-th node.
    pub fn click_node(&mut self, index: usize) -> Option<String> {
        let (x, y) = self.screen_point_of(index)?;
        self.click(x, y)
    }

    /// Draw `n` frames at 60 Hz.
    pub fn run_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.viewer.tick(1.0 / 60.0);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn nodes(&self) -> &[SceneNode] {
        self.viewer.scene().nodes()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Position of the first node with this label
    pub fn position_of(&self, label: &str) -> Option<Vec3> {
        self.nodes()
            .iter()
            .find(|n| n.label() == label)
            .map(|n| n.position)
    }

    /// Labels of highlighted nodes, in scene order
    pub fn highlighted(&self) -> Vec<String> {
        self.nodes()
            .iter()
            .filter(|n| n.material().is_highlighted())
            .map(|n| n.label().to_string())
            .collect()
    }

    /// Container coordinates of a node's center, if in front of the camera
    pub fn screen_point_of(&self, index: usize) -> Option<(f32, f32)> {
        let node = self.nodes().get(index)?;
        let p = self.viewer.camera().project(node.position, self.viewer.container())?;
        Some((p.x, p.y))
    }

    pub fn selected(&self) -> Option<&str> {
        self.viewer.selected_panel()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.log.borrow().frames_drawn
    }

    pub fn last_frame(&self) -> Option<FrameSnapshot> {
        self.log.borrow().last_frame.clone()
    }

    /// Surface log, readable after [`TestHarness::unmount`]
    pub fn surface_log(&self) -> Rc<RefCell<SurfaceLog>> {
        Rc::clone(&self.log)
    }

    /// Unmount the viewer, returning the surface log.
    pub fn unmount(self) -> Rc<RefCell<SurfaceLog>> {
        let log = self.surface_log();
        self.viewer.unmount();
        log
    }
}
