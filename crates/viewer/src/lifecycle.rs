//! Mounted viewer: scene, camera and render surface bound to one container
//!
//! A `Viewer` exists only while mounted. Dropping it (or calling
//! [`Viewer::unmount`]) stops the frame loop and releases every node and the
//! surface.

use shared::{PanelLabel, PanelRecord};

use crate::error::ViewerError;
use crate::render::{RenderFrame, RenderSurface};
use crate::scene::{SceneSynchronizer, SyncOutcome, ViewInputs};
use crate::state::selection::PanelSelection;
use crate::state::settings::ViewerSettings;
use crate::viewport::camera::OrbitCamera;
use crate::viewport::ContainerSize;

pub struct Viewer<S: RenderSurface> {
    surface: S,
    camera: OrbitCamera,
    scene: SceneSynchronizer,
    selection: PanelSelection,
    container: ContainerSize,
    background: [u8; 3],
    frames_drawn: u64,
    mounted: bool,
}

impl<S: RenderSurface> Viewer<S> {
    /// Bind a surface to a container and start accepting input.
    pub fn mount(
        mut surface: S,
        container: ContainerSize,
        settings: ViewerSettings,
    ) -> Result<Self, ViewerError> {
        if let Err(e) = surface.init(container) {
            tracing::error!("Failed to mount viewer: {e}");
            return Err(e);
        }

        let mut camera = OrbitCamera::new(&settings.camera);
        camera.set_aspect(container);

        tracing::info!(
            "Viewer mounted ({}x{} @{})",
            container.width,
            container.height,
            container.pixel_ratio
        );

        Ok(Self {
            surface,
            camera,
            scene: SceneSynchronizer::new(&settings),
            selection: PanelSelection::default(),
            container,
            background: settings.appearance.background_color,
            frames_drawn: 0,
            mounted: true,
        })
    }

    // ── Inputs ────────────────────────────────────────────────

    /// Replace the panel list. Reframes the camera when the list is non-empty.
    pub fn set_panels(&mut self, panels: Vec<PanelRecord>) -> SyncOutcome {
        let outcome = self.scene.set_panels(panels);
        self.reframe_if_rebuilt(outcome);
        outcome
    }

    pub fn set_exploded(&mut self, exploded: bool) -> SyncOutcome {
        let outcome = self.scene.set_exploded(exploded);
        self.reframe_if_rebuilt(outcome);
        outcome
    }

    pub fn set_wireframe(&mut self, wireframe: bool) -> SyncOutcome {
        self.scene.set_wireframe(wireframe)
    }

    /// Host-side write of the selected panel.
    pub fn set_selection(&mut self, selection: Option<PanelLabel>) -> SyncOutcome {
        self.selection.set(selection);
        self.scene.set_selection(self.selection.get().map(str::to_string))
    }

    /// Reconcile against a full input tuple.
    pub fn sync(&mut self, inputs: &ViewInputs) -> SyncOutcome {
        self.selection.set(inputs.selection.clone());
        let outcome = self.scene.sync(inputs);
        self.reframe_if_rebuilt(outcome);
        outcome
    }

    fn reframe_if_rebuilt(&mut self, outcome: SyncOutcome) {
        if let SyncOutcome::Rebuilt { bounds } = outcome {
            self.camera.frame_extent(bounds.max_extent());
        }
    }

    // ── Pointer ───────────────────────────────────────────────

    /// Resolve a click at container coordinates (origin top-left) and update
    /// the selection. Returns the new selection.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Option<&str> {
        let hit = if self.container.is_drawable() {
            let ray = self.camera.screen_ray(x, y, self.container);
            self.scene.pick(&ray).map(|node| node.label().to_string())
        } else {
            None
        };

        tracing::debug!("Click at ({x:.1}, {y:.1}) hit {hit:?}");
        if self.selection.apply_pick(hit.as_deref()) {
            self.scene
                .set_selection(self.selection.get().map(str::to_string));
        }
        self.selection.get()
    }

    /// Orbit drag in pixels (eased in by the damped controller)
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.camera.rotate(dx, dy);
    }

    /// Wheel zoom; positive moves closer
    pub fn dolly(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.camera.pan(dx, dy);
    }

    // ── Host loop ─────────────────────────────────────────────

    /// Container was measured. Collapsed or bogus sizes are ignored.
    pub fn resize(&mut self, size: ContainerSize) {
        if !size.is_drawable() {
            tracing::warn!("Ignoring resize to {}x{}", size.width, size.height);
            return;
        }
        if size == self.container {
            return;
        }
        self.container = size;
        self.camera.set_aspect(size);
        self.surface.resize(size);
    }

    /// One frame: advance the damped controller, then draw.
    pub fn tick(&mut self, dt: f32) {
        self.camera.update(dt);
        let frame = RenderFrame {
            camera: &self.camera,
            nodes: self.scene.nodes(),
            size: self.container,
            background: self.background,
        };
        self.surface.draw(&frame);
        self.frames_drawn += 1;
    }

    /// Stop rendering and release the scene and surface.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.camera.stop();
        self.scene.clear();
        self.surface.dispose();
        tracing::info!("Viewer unmounted after {} frames", self.frames_drawn);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn selected_panel(&self) -> Option<&str> {
        self.selection.get()
    }

    pub fn selection(&self) -> &PanelSelection {
        &self.selection
    }

    pub fn scene(&self) -> &SceneSynchronizer {
        &self.scene
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl<S: RenderSurface> Drop for Viewer<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
