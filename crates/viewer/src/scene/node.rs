//! Scene nodes: one box mesh per panel

use glam::Vec3;
use shared::{PanelLabel, PanelRecord};

use crate::layout::bounds::{to_vec3, Bounds};
use crate::layout::palette::{panel_color, to_unit_rgb};
use crate::viewport::mesh::{box_mesh, MeshData};

/// No emission
pub const NO_EMISSIVE: [u8; 3] = [0, 0, 0];

/// Surface appearance of one panel
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Base color
    pub color: [u8; 3],
    /// Emissive color, non-zero only while highlighted
    pub emissive: [u8; 3],
    /// Part of the current selection
    pub highlighted: bool,
    pub wireframe: bool,
    pub transparent: bool,
    /// 1.0 = opaque
    pub opacity: f32,
}

impl Material {
    /// Opaque material colored by the panel's label
    pub fn for_label(label: &str) -> Self {
        Self {
            color: panel_color(label),
            emissive: NO_EMISSIVE,
            highlighted: false,
            wireframe: false,
            transparent: false,
            opacity: 1.0,
        }
    }

    /// Switch between solid and translucent wireframe display
    pub fn set_wireframe(&mut self, wireframe: bool, wireframe_opacity: f32) {
        self.wireframe = wireframe;
        self.transparent = wireframe;
        self.opacity = if wireframe { wireframe_opacity } else { 1.0 };
    }

    /// Mark or unmark as selected; emission follows the flag.
    pub fn set_highlight(&mut self, highlighted: bool, emissive: [u8; 3]) {
        self.highlighted = highlighted;
        self.emissive = if highlighted { emissive } else { NO_EMISSIVE };
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Box geometry sized to a panel's extents, centered on the node origin
#[derive(Clone, Debug)]
pub struct BoxGeometry {
    /// Unique per created geometry; a renderer keys its GPU buffers on this
    pub id: u64,
    pub size: Vec3,
    pub mesh: MeshData,
}

/// Drawable node owning its geometry and material exclusively.
/// Dropping the node releases both.
#[derive(Debug)]
pub struct SceneNode {
    label: PanelLabel,
    geometry: BoxGeometry,
    material: Material,
    /// World position of the box center
    pub position: Vec3,
}

impl SceneNode {
    pub fn new(geometry_id: u64, panel: &PanelRecord, position: Vec3) -> Self {
        let material = Material::for_label(&panel.label);
        let size = to_vec3(panel.size());
        let mesh = box_mesh(size.x, size.y, size.z, to_unit_rgb(material.color));
        Self {
            label: panel.label.clone(),
            geometry: BoxGeometry {
                id: geometry_id,
                size,
                mesh,
            },
            material,
            position,
        }
    }

    /// Source panel label
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    /// World-space bounds at the current position
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center_size(self.position, self.geometry.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_from_panel() {
        let panel = PanelRecord::new("Shelf", [22.5, 0.75, 22.0], [12.0, 19.0, 12.5]);
        let node = SceneNode::new(7, &panel, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(node.label(), "Shelf");
        assert_eq!(node.geometry().id, 7);
        assert_eq!(node.geometry().size, Vec3::new(22.5, 0.75, 22.0));
        assert_eq!(node.material().color, panel_color("Shelf"));
        assert!(!node.material().is_highlighted());
        assert_eq!(node.bounds().centroid(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_wireframe_toggle() {
        let mut m = Material::for_label("Top");
        m.set_wireframe(true, 0.35);
        assert!(m.wireframe && m.transparent);
        assert!(m.opacity < 1.0);
        m.set_wireframe(false, 0.35);
        assert!(!m.wireframe && !m.transparent);
        assert_eq!(m.opacity, 1.0);
    }

    #[test]
    fn test_highlight_does_not_depend_on_emissive_color() {
        let mut m = Material::for_label("Top");
        m.set_highlight(true, NO_EMISSIVE);
        assert!(m.is_highlighted());
        m.set_highlight(false, [68, 68, 255]);
        assert!(!m.is_highlighted());
        assert_eq!(m.emissive, NO_EMISSIVE);
    }
}
