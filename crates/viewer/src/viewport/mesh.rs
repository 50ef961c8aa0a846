use glam::Vec3;

/// Floats per interleaved vertex: position(3) + normal(3) + color(3)
pub const VERTEX_STRIDE: usize = 9;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`
    pub fn position(&self, i: usize) -> Vec3 {
        let base = i * VERTEX_STRIDE;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }
}

/// Axis-aligned box centered on the origin, one flat-shaded quad per face.
pub fn box_mesh(w: f32, h: f32, d: f32, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * VERTEX_STRIDE);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / VERTEX_STRIDE) as u32;
        for v in quad {
            push_vert(&mut vertices, *v, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// The 8 corners of a box centered at `center`, ordered so that bit 0/1/2 of
/// the index select the +X/+Y/+Z side.
pub fn box_corners(center: Vec3, size: Vec3) -> [Vec3; 8] {
    let h = size * 0.5;
    std::array::from_fn(|i| {
        let sx = if i & 1 != 0 { h.x } else { -h.x };
        let sy = if i & 2 != 0 { h.y } else { -h.y };
        let sz = if i & 4 != 0 { h.z } else { -h.z };
        center + Vec3::new(sx, sy, sz)
    })
}

/// Corner index pairs for the 12 box edges (see [`box_corners`]).
pub const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7),
    (0, 2), (1, 3), (4, 6), (5, 7),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts() {
        let m = box_mesh(1.0, 2.0, 3.0, [0.5, 0.5, 0.5]);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.triangle_count(), 12);
    }

    #[test]
    fn test_box_extent_matches_size() {
        let m = box_mesh(18.0, 30.0, 0.75, [1.0, 1.0, 1.0]);
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for i in 0..m.vertex_count() {
            min = min.min(m.position(i));
            max = max.max(m.position(i));
        }
        assert_eq!(max - min, Vec3::new(18.0, 30.0, 0.75));
        assert_eq!((max + min) * 0.5, Vec3::ZERO);
    }

    #[test]
    fn test_corner_layout() {
        let c = box_corners(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(c[0], Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(c[7], Vec3::new(1.0, 2.0, 3.0));
        for (a, b) in BOX_EDGES {
            // every edge runs along exactly one axis
            let d = (c[a] - c[b]).abs();
            assert_eq!([d.x > 0.0, d.y > 0.0, d.z > 0.0].iter().filter(|x| **x).count(), 1);
        }
    }
}
