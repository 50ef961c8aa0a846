//! Render surface backed by egui's painter
//!
//! Solid boxes are drawn as flat-shaded faces sorted back to front; wireframe
//! mode draws the 12 box edges only. Shapes are kept in container-local
//! coordinates and translated by the host when painted.

use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};
use glam::Vec3;

use cabinet_viewer_lib::error::ViewerError;
use cabinet_viewer_lib::render::{RenderFrame, RenderSurface};
use cabinet_viewer_lib::scene::SceneNode;
use cabinet_viewer_lib::viewport::camera::OrbitCamera;
use cabinet_viewer_lib::viewport::mesh::{box_corners, BOX_EDGES};
use cabinet_viewer_lib::ContainerSize;

/// Corner indices (see `box_corners`) and outward normal of each box face
const BOX_FACES: [([usize; 4], Vec3); 6] = [
    ([0, 4, 6, 2], Vec3::NEG_X),
    ([1, 3, 7, 5], Vec3::X),
    ([0, 1, 5, 4], Vec3::NEG_Y),
    ([2, 6, 7, 3], Vec3::Y),
    ([0, 2, 3, 1], Vec3::NEG_Z),
    ([4, 5, 7, 6], Vec3::Z),
];

const AMBIENT: f32 = 0.35;

struct Face {
    depth: f32,
    shape: Shape,
}

#[derive(Default)]
pub struct PainterSurface {
    size: Option<ContainerSize>,
    shapes: Vec<Shape>,
}

impl PainterSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes of the last drawn frame, offset to `origin`
    pub fn shapes_at(&self, origin: Pos2) -> impl Iterator<Item = Shape> + '_ {
        let offset = origin.to_vec2();
        self.shapes.iter().cloned().map(move |mut shape| {
            shape.translate(offset);
            shape
        })
    }
}

impl RenderSurface for PainterSurface {
    fn init(&mut self, size: ContainerSize) -> Result<(), ViewerError> {
        self.size = Some(size);
        Ok(())
    }

    fn resize(&mut self, size: ContainerSize) {
        self.size = Some(size);
    }

    fn draw(&mut self, frame: &RenderFrame<'_>) {
        self.shapes.clear();
        let [r, g, b] = frame.background;
        self.shapes.push(Shape::rect_filled(
            Rect::from_min_size(Pos2::ZERO, Vec2::new(frame.size.width, frame.size.height)),
            0.0,
            Color32::from_rgb(r, g, b),
        ));

        let mut faces = Vec::new();
        for node in frame.nodes {
            if node.material().wireframe {
                push_edges(&mut self.shapes, frame.camera, frame.size, node);
            } else {
                push_faces(&mut faces, frame.camera, frame.size, node);
            }
        }

        // painter's algorithm: farthest first
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        self.shapes.extend(faces.into_iter().map(|f| f.shape));
    }

    fn dispose(&mut self) {
        self.shapes.clear();
        self.size = None;
    }
}

fn node_color(node: &SceneNode, shade: f32) -> Color32 {
    let m = node.material();
    let channel = |i: usize| {
        let lit = m.color[i] as f32 * shade + m.emissive[i] as f32;
        lit.min(255.0) as u8
    };
    let alpha = (m.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(channel(0), channel(1), channel(2), alpha)
}

fn push_edges(out: &mut Vec<Shape>, camera: &OrbitCamera, size: ContainerSize, node: &SceneNode) {
    let corners = box_corners(node.position, node.geometry().size);
    let projected: Vec<Option<Pos2>> = corners
        .iter()
        .map(|&c| camera.project(c, size).map(|p| Pos2::new(p.x, p.y)))
        .collect();

    let width = if node.material().is_highlighted() { 2.0 } else { 1.0 };
    let stroke = Stroke::new(width, node_color(node, 1.0));
    for (a, b) in BOX_EDGES {
        if let (Some(pa), Some(pb)) = (projected[a], projected[b]) {
            out.push(Shape::line_segment([pa, pb], stroke));
        }
    }
}

fn push_faces(out: &mut Vec<Face>, camera: &OrbitCamera, size: ContainerSize, node: &SceneNode) {
    let corners = box_corners(node.position, node.geometry().size);
    let eye = camera.eye_position();
    let light = Vec3::new(0.4, 0.8, 0.5).normalize();

    for (indices, normal) in BOX_FACES {
        let center = indices.iter().map(|&i| corners[i]).sum::<Vec3>() / 4.0;
        if normal.dot(eye - center) <= 0.0 {
            continue;
        }

        let mut points = Vec::with_capacity(4);
        let mut depth = 0.0;
        for &i in &indices {
            let Some(p) = camera.project(corners[i], size) else {
                break;
            };
            points.push(Pos2::new(p.x, p.y));
            depth += p.z;
        }
        if points.len() < 4 {
            continue;
        }

        let shade = AMBIENT + (1.0 - AMBIENT) * normal.dot(light).max(0.0);
        let edge = if node.material().is_highlighted() {
            Stroke::new(1.5, Color32::WHITE)
        } else {
            Stroke::new(0.5, Color32::from_black_alpha(90))
        };
        out.push(Face {
            depth: depth / 4.0,
            shape: Shape::convex_polygon(points, node_color(node, shade), edge),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_viewer_lib::fixtures::left_side_panel;
    use cabinet_viewer_lib::{Viewer, ViewerSettings};

    fn viewer() -> Viewer<PainterSurface> {
        let mut v = Viewer::mount(
            PainterSurface::new(),
            ContainerSize::new(800.0, 600.0, 1.0),
            ViewerSettings::default(),
        )
        .unwrap();
        v.set_panels(vec![left_side_panel()]);
        v
    }

    #[test]
    fn test_solid_box_draws_visible_faces() {
        let mut v = viewer();
        v.tick(1.0 / 60.0);
        // background plus at most three faces of a box
        let count = v.surface().shapes.len();
        assert!((2..=4).contains(&count), "{count}");
    }

    #[test]
    fn test_wireframe_draws_edges() {
        let mut v = viewer();
        v.set_wireframe(true);
        v.tick(1.0 / 60.0);
        assert_eq!(v.surface().shapes.len(), 1 + BOX_EDGES.len());
    }

    #[test]
    fn test_empty_scene_draws_background_only() {
        let mut v = viewer();
        v.set_panels(vec![]);
        v.tick(1.0 / 60.0);
        assert_eq!(v.surface().shapes.len(), 1);
    }
}
