//! Retained scene graph and its reconciliation against viewer inputs
//!
//! Each input has its own update path:
//! - panel list: drop every node and rebuild geometry, materials and positions
//! - exploded flag: move the existing nodes, keep geometry and materials
//! - wireframe / selection: touch materials only

mod node;

pub use node::{BoxGeometry, Material, SceneNode, NO_EMISSIVE};

use glam::Vec3;
use shared::{PanelLabel, PanelRecord};

use crate::layout::bounds::{compute_bounds, to_vec3, Bounds};
use crate::layout::explode::explode_offset;
use crate::state::settings::ViewerSettings;
use crate::viewport::picking::{pick_nearest, Ray};

/// Complete set of inputs the scene is reconciled against
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewInputs {
    pub panels: Vec<PanelRecord>,
    pub exploded: bool,
    pub wireframe: bool,
    pub selection: Option<PanelLabel>,
}

/// Which update path a synchronization took
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncOutcome {
    /// Nodes recreated from a non-empty panel list
    Rebuilt { bounds: Bounds },
    /// Panel list was empty; scene is now empty
    Cleared,
    /// Existing nodes moved (explode toggle)
    Repositioned,
    /// Materials restyled (wireframe or selection)
    Restyled,
    /// Nothing to do
    Unchanged,
}

/// Sole writer of the scene graph
pub struct SceneSynchronizer {
    nodes: Vec<SceneNode>,
    /// Panel list the nodes were built from, in node order
    panels: Vec<PanelRecord>,
    /// Assembly centroid subtracted from every position
    centroid: Vec3,
    exploded: bool,
    wireframe: bool,
    selection: Option<PanelLabel>,
    explode_distance: f32,
    wireframe_opacity: f32,
    highlight_emissive: [u8; 3],
    /// Bumped whenever geometry is created or released
    geometry_version: u64,
    rebuild_count: u64,
    next_geometry_id: u64,
}

impl SceneSynchronizer {
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            nodes: Vec::new(),
            panels: Vec::new(),
            centroid: Vec3::ZERO,
            exploded: false,
            wireframe: false,
            selection: None,
            explode_distance: settings.explode_distance,
            wireframe_opacity: settings.appearance.wireframe_opacity,
            highlight_emissive: settings.appearance.highlight_emissive,
            geometry_version: 0,
            rebuild_count: 0,
            next_geometry_id: 0,
        }
    }

    // ── Inputs ────────────────────────────────────────────────

    /// Replace the panel list and rebuild every node.
    pub fn set_panels(&mut self, panels: Vec<PanelRecord>) -> SyncOutcome {
        self.panels = panels;
        self.rebuild()
    }

    /// Toggle explode layout, moving existing nodes in place.
    pub fn set_exploded(&mut self, exploded: bool) -> SyncOutcome {
        if self.exploded == exploded {
            return SyncOutcome::Unchanged;
        }
        self.exploded = exploded;
        self.reposition()
    }

    pub fn set_wireframe(&mut self, wireframe: bool) -> SyncOutcome {
        if self.wireframe == wireframe {
            return SyncOutcome::Unchanged;
        }
        self.wireframe = wireframe;
        self.restyle()
    }

    pub fn set_selection(&mut self, selection: Option<PanelLabel>) -> SyncOutcome {
        if self.selection == selection {
            return SyncOutcome::Unchanged;
        }
        self.selection = selection;
        self.restyle()
    }

    /// Reconcile against a full input tuple, taking the narrowest path.
    ///
    /// A changed panel list always rebuilds, even when only the order changed,
    /// since the explode path pairs nodes with panels by index.
    pub fn sync(&mut self, inputs: &ViewInputs) -> SyncOutcome {
        if inputs.panels != self.panels {
            self.exploded = inputs.exploded;
            self.wireframe = inputs.wireframe;
            self.selection = inputs.selection.clone();
            return self.set_panels(inputs.panels.clone());
        }

        let moved = self.set_exploded(inputs.exploded);
        let wire = self.set_wireframe(inputs.wireframe);
        let sel = self.set_selection(inputs.selection.clone());

        match (moved, wire, sel) {
            (SyncOutcome::Repositioned, _, _) => SyncOutcome::Repositioned,
            (_, SyncOutcome::Restyled, _) | (_, _, SyncOutcome::Restyled) => SyncOutcome::Restyled,
            (outcome, _, _) => outcome,
        }
    }

    /// Drop every node (releasing geometry and materials) and forget the inputs.
    pub fn clear(&mut self) {
        if !self.nodes.is_empty() {
            self.geometry_version += 1;
        }
        self.nodes.clear();
        self.panels.clear();
        self.centroid = Vec3::ZERO;
    }

    // ── Update paths ──────────────────────────────────────────

    fn rebuild(&mut self) -> SyncOutcome {
        if !self.nodes.is_empty() {
            self.nodes.clear();
            self.geometry_version += 1;
        }

        let Some(bounds) = compute_bounds(&self.panels) else {
            self.centroid = Vec3::ZERO;
            tracing::debug!("Scene cleared (empty panel list)");
            return SyncOutcome::Cleared;
        };
        self.centroid = bounds.centroid();

        let mut nodes = Vec::with_capacity(self.panels.len());
        for panel in &self.panels {
            let position = self.layout_position(panel);
            nodes.push(SceneNode::new(self.next_geometry_id, panel, position));
            self.next_geometry_id += 1;
        }
        self.nodes = nodes;
        self.geometry_version += 1;
        self.rebuild_count += 1;
        self.restyle();

        tracing::debug!(
            "Scene rebuilt: {} panels, extent {:.2}",
            self.nodes.len(),
            bounds.max_extent()
        );
        SyncOutcome::Rebuilt { bounds }
    }

    fn reposition(&mut self) -> SyncOutcome {
        if self.nodes.is_empty() {
            return SyncOutcome::Unchanged;
        }
        if self.nodes.len() != self.panels.len() {
            return self.rebuild();
        }

        // nodes were created in panel order
        for i in 0..self.nodes.len() {
            let position = self.layout_position(&self.panels[i]);
            self.nodes[i].position = position;
        }
        tracing::debug!("Scene repositioned (exploded: {})", self.exploded);
        SyncOutcome::Repositioned
    }

    fn restyle(&mut self) -> SyncOutcome {
        for node in &mut self.nodes {
            let highlighted = self.selection.as_deref() == Some(node.label());
            let material = node.material_mut();
            material.set_wireframe(self.wireframe, self.wireframe_opacity);
            material.set_highlight(highlighted, self.highlight_emissive);
        }
        SyncOutcome::Restyled
    }

    fn layout_position(&self, panel: &PanelRecord) -> Vec3 {
        to_vec3(panel.center()) - self.centroid
            + explode_offset(&panel.label, self.exploded, self.explode_distance)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn panels(&self) -> &[PanelRecord] {
        &self.panels
    }

    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn geometry_version(&self) -> u64 {
        self.geometry_version
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Nearest node hit by the ray
    pub fn pick(&self, ray: &Ray) -> Option<&SceneNode> {
        let bounds: Vec<Bounds> = self.nodes.iter().map(SceneNode::bounds).collect();
        pick_nearest(ray, &bounds).map(|i| &self.nodes[i])
    }
}
