use glam::Vec3;

use crate::layout::bounds::Bounds;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Distance along the ray to the first face of `aabb` it crosses.
///
/// Slab test on all three axes at once. A ray starting inside the box hits
/// its exit face. `None` when the box is missed or entirely behind the origin.
pub fn ray_aabb(ray: &Ray, aabb: &Bounds) -> Option<f32> {
    let inv = ray.direction.recip();
    let to_min = (aabb.min - ray.origin) * inv;
    let to_max = (aabb.max - ray.origin) * inv;

    let enter = to_min.min(to_max).max_element();
    let exit = to_min.max(to_max).min_element();

    if exit < 0.0 || enter > exit {
        None
    } else if enter < 0.0 {
        Some(exit)
    } else {
        Some(enter)
    }
}

/// Index of the nearest box hit by the ray.
///
/// Targets are matched by position rather than id since panel labels repeat.
/// Ties keep the earlier target.
pub fn pick_nearest<'a, I>(ray: &Ray, targets: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Bounds>,
{
    let mut best: Option<(usize, f32)> = None;

    for (index, aabb) in targets.into_iter().enumerate() {
        if let Some(dist) = ray_aabb(ray, aabb) {
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((index, dist));
            }
        }
    }

    best.map(|(index, _)| index)
}
