//! Browser bindings for the cabinet viewer.
//!
//! The page owns the canvas and draws from the JSON frame snapshots; this
//! crate owns the scene, camera, picking and selection.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use cabinet_viewer_lib::command::execute_json;
use cabinet_viewer_lib::render::{SnapshotSurface, SurfaceLog};
use cabinet_viewer_lib::{ContainerSize, Viewer, ViewerError, ViewerSettings};
use shared::panels_from_json;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("Cabinet viewer initialized");
}

fn js_error(e: ViewerError) -> JsError {
    JsError::new(&e.to_string())
}

/// Mounted viewer plus its frame log. Every call after `unmount` is a no-op.
struct ViewerHandle {
    viewer: Option<Viewer<SnapshotSurface>>,
    log: Rc<RefCell<SurfaceLog>>,
}

impl ViewerHandle {
    fn mount(container: ContainerSize, settings: ViewerSettings) -> Result<Self, ViewerError> {
        let surface = SnapshotSurface::new();
        let log = surface.log();
        let viewer = Viewer::mount(surface, container, settings)?;
        Ok(Self {
            viewer: Some(viewer),
            log,
        })
    }

    fn set_panels_json(&mut self, json: &str) -> Result<usize, ViewerError> {
        let panels = panels_from_json(json)?;
        let count = panels.len();
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.set_panels(panels);
        }
        Ok(count)
    }

    fn with_viewer(&mut self, f: impl FnOnce(&mut Viewer<SnapshotSurface>)) {
        if let Some(viewer) = self.viewer.as_mut() {
            f(viewer);
        }
    }

    fn click(&mut self, x: f32, y: f32) -> Option<String> {
        self.viewer
            .as_mut()
            .and_then(|viewer| viewer.handle_click(x, y).map(str::to_string))
    }

    fn selected(&self) -> Option<String> {
        self.viewer
            .as_ref()
            .and_then(|viewer| viewer.selected_panel().map(str::to_string))
    }

    /// Last drawn frame as JSON, `null` before the first tick or after unmount
    fn frame_json(&self) -> Result<String, ViewerError> {
        Ok(serde_json::to_string(&self.log.borrow().last_frame)?)
    }

    fn execute(&mut self, json: &str) -> Result<String, ViewerError> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Ok(String::from("null"));
        };
        let response = execute_json(viewer, json)?;
        Ok(serde_json::to_string(&response)?)
    }

    fn unmount(&mut self) {
        if let Some(viewer) = self.viewer.take() {
            viewer.unmount();
        }
    }
}

/// Viewer bound to one canvas on the page.
#[wasm_bindgen]
pub struct WebViewer {
    handle: ViewerHandle,
}

#[wasm_bindgen]
impl WebViewer {
    /// Mount on a container of `width` x `height` CSS pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<WebViewer, JsError> {
        let container = ContainerSize::new(width, height, pixel_ratio);
        let handle = ViewerHandle::mount(container, ViewerSettings::load()).map_err(js_error)?;
        Ok(WebViewer { handle })
    }

    /// Mount with settings given as JSON (missing fields take defaults).
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(
        width: f32,
        height: f32,
        pixel_ratio: f32,
        settings_json: &str,
    ) -> Result<WebViewer, JsError> {
        let settings = ViewerSettings::from_json(settings_json).map_err(js_error)?;
        let container = ContainerSize::new(width, height, pixel_ratio);
        let handle = ViewerHandle::mount(container, settings).map_err(js_error)?;
        Ok(WebViewer { handle })
    }

    /// Replace the panel list from a JSON array. Returns the panel count.
    #[wasm_bindgen(js_name = setPanelsJson)]
    pub fn set_panels_json(&mut self, json: &str) -> Result<usize, JsError> {
        self.handle.set_panels_json(json).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setExploded)]
    pub fn set_exploded(&mut self, exploded: bool) {
        self.handle.with_viewer(|v| {
            v.set_exploded(exploded);
        });
    }

    #[wasm_bindgen(js_name = setWireframe)]
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.handle.with_viewer(|v| {
            v.set_wireframe(wireframe);
        });
    }

    /// Host-side selection write; `undefined` clears.
    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&mut self, label: Option<String>) {
        self.handle.with_viewer(|v| {
            v.set_selection(label);
        });
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<String> {
        self.handle.selected()
    }

    /// Pointer click at canvas coordinates. Returns the new selection.
    pub fn click(&mut self, x: f32, y: f32) -> Option<String> {
        self.handle.click(x, y)
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.handle.with_viewer(|v| v.orbit(dx, dy));
    }

    pub fn dolly(&mut self, delta: f32) {
        self.handle.with_viewer(|v| v.dolly(delta));
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.handle.with_viewer(|v| v.pan(dx, dy));
    }

    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.handle
            .with_viewer(|v| v.resize(ContainerSize::new(width, height, pixel_ratio)));
    }

    /// Advance one animation frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.handle.with_viewer(|v| v.tick(dt));
    }

    #[wasm_bindgen(js_name = frameJson)]
    pub fn frame_json(&self) -> Result<String, JsError> {
        self.handle.frame_json().map_err(js_error)
    }

    /// Last drawn frame as a JS object
    pub fn frame(&self) -> Result<JsValue, JsError> {
        let json = self.handle.frame_json().map_err(js_error)?;
        js_sys::JSON::parse(&json).map_err(|_| JsError::new("Failed to parse frame JSON"))
    }

    /// Run one JSON command (see the command protocol) and return the response JSON.
    pub fn execute(&mut self, json: &str) -> Result<String, JsError> {
        self.handle.execute(json).map_err(js_error)
    }

    /// Release the scene and stop drawing.
    pub fn unmount(&mut self) {
        self.handle.unmount();
    }
}
