//! Mesh validation utilities.
//!
//! `MeshValidator` checks box geometry integrity: stride, in-range indices,
//! unit normals and extents.

use glam::Vec3;

use crate::layout::bounds::Bounds;
use crate::viewport::mesh::{MeshData, VERTEX_STRIDE};

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Vertex buffer length is a multiple of the stride.
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % VERTEX_STRIDE == 0
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// All vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        self.mesh.vertices.chunks_exact(VERTEX_STRIDE).all(|v| {
            let n = Vec3::new(v[3], v[4], v[5]);
            (n.length() - 1.0).abs() <= epsilon
        })
    }

    /// Bounds of all vertex positions, None for an empty mesh.
    pub fn bounds(&self) -> Option<Bounds> {
        let count = self.vertex_count();
        if count == 0 {
            return None;
        }
        let first = self.mesh.position(0);
        let (min, max) = (1..count).fold((first, first), |(min, max), i| {
            let p = self.mesh.position(i);
            (min.min(p), max.max(p))
        });
        Some(Bounds::new(min, max))
    }

    /// Extents match `expected` within epsilon.
    pub fn has_size(&self, expected: Vec3, epsilon: f32) -> bool {
        self.bounds()
            .is_some_and(|b| b.size().abs_diff_eq(expected, epsilon))
    }

    /// Run every structural check and return the failures.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.is_stride_valid() {
            errors.push(format!(
                "vertex buffer length {} is not a multiple of {VERTEX_STRIDE}",
                self.mesh.vertices.len()
            ));
        }
        if !self.is_index_stride_valid() {
            errors.push(format!(
                "index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }
        if !self.are_indices_in_range() {
            errors.push("index out of vertex range".to_string());
        }
        if !self.are_normals_normalized(1e-4) {
            errors.push("non-unit normal".to_string());
        }
        errors
    }
}
