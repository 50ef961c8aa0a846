//! Axis-aligned bounds of a panel assembly

use glam::Vec3;
use shared::PanelRecord;

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of `size` centered at `center`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Bounds of a single panel
    pub fn of_panel(panel: &PanelRecord) -> Self {
        Self {
            min: to_vec3(panel.min_corner()),
            max: to_vec3(panel.max_corner()),
        }
    }

    /// Geometric center of the box
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest of the three axis extents
    pub fn max_extent(&self) -> f32 {
        self.size().max_element()
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Bounds of a panel list, or `None` for an empty list.
pub fn compute_bounds(panels: &[PanelRecord]) -> Option<Bounds> {
    let mut iter = panels.iter();
    let first = Bounds::of_panel(iter.next()?);
    Some(iter.fold(first, |acc, p| acc.union(&Bounds::of_panel(p))))
}

pub(crate) fn to_vec3(v: [f64; 3]) -> Vec3 {
    Vec3::new(v[0] as f32, v[1] as f32, v[2] as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(label: &str, size: [f64; 3], center: [f64; 3]) -> PanelRecord {
        PanelRecord::new(label, size, center)
    }

    #[test]
    fn test_empty_is_none() {
        assert!(compute_bounds(&[]).is_none());
    }

    #[test]
    fn test_single_panel_centroid_is_center() {
        let b = compute_bounds(&[panel("Left Side", [18.0, 30.0, 0.75], [0.0, 15.0, 0.0])]).unwrap();
        assert_eq!(b.centroid(), Vec3::new(0.0, 15.0, 0.0));
        assert_eq!(b.size(), Vec3::new(18.0, 30.0, 0.75));
        assert_eq!(b.max_extent(), 30.0);
    }

    #[test]
    fn test_two_panels() {
        let b = compute_bounds(&[
            panel("Left Side", [0.75, 30.0, 24.0], [-10.0, 15.0, 0.0]),
            panel("Right Side", [0.75, 30.0, 24.0], [10.0, 15.0, 0.0]),
        ])
        .unwrap();
        assert_eq!(b.min, Vec3::new(-10.375, 0.0, -12.0));
        assert_eq!(b.max, Vec3::new(10.375, 30.0, 12.0));
        assert_eq!(b.centroid(), Vec3::new(0.0, 15.0, 0.0));
    }

    #[test]
    fn test_min_le_max_and_centroid_inside() {
        // deterministic pseudo-random lists
        let mut seed = 0x2545_f491_u32;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed % 1000) as f64 / 10.0
        };
        for n in 1..20 {
            let panels: Vec<_> = (0..n)
                .map(|i| {
                    panel(
                        &format!("p{i}"),
                        [next() + 0.1, next() + 0.1, next() + 0.1],
                        [next() - 50.0, next() - 50.0, next() - 50.0],
                    )
                })
                .collect();
            let b = compute_bounds(&panels).unwrap();
            assert!(b.min.cmple(b.max).all());
            assert!(b.contains(b.centroid()));
        }
    }
}
