use glam::{Mat4, Vec3, Vec4};

use super::picking::Ray;
use super::ContainerSize;
use crate::state::settings::CameraSettings;

/// Pending rotation below this (radians) is dropped so the damped motion settles.
const REST_EPSILON: f32 = 1e-5;

/// Damped arc-ball orbit camera.
///
/// Drag input accumulates as pending rotation; [`OrbitCamera::update`] eases
/// it in over the following frames.
pub struct OrbitCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Orbit pivot
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    /// Width / height of the render surface
    pub aspect: f32,
    near: f32,
    far: f32,
    damping_factor: f32,
    rotate_speed: f32,
    min_distance: f32,
    max_distance: f32,
    frame_distance_factor: f32,
    frame_yaw: f32,
    frame_pitch: f32,
    pending_yaw: f32,
    pending_pitch: f32,
}

/// Orbit distance limits from settings, ordered and finite.
fn distance_limits(settings: &CameraSettings) -> (f32, f32) {
    let (mut min, mut max) = (settings.min_distance, settings.max_distance);
    if !min.is_finite() || !max.is_finite() {
        tracing::warn!("Non-finite camera distance limits ({min}, {max}), using defaults");
        let defaults = CameraSettings::default();
        (min, max) = (defaults.min_distance, defaults.max_distance);
    }
    if min > max {
        tracing::warn!("Camera min_distance {min} exceeds max_distance {max}, swapping");
        std::mem::swap(&mut min, &mut max);
    }
    (min, max)
}

impl OrbitCamera {
    pub fn new(settings: &CameraSettings) -> Self {
        let (min_distance, max_distance) = distance_limits(settings);
        Self {
            yaw: settings.frame_yaw,
            pitch: settings.frame_pitch,
            distance: 100.0_f32.clamp(min_distance, max_distance),
            target: Vec3::ZERO,
            fov: settings.fov_degrees.to_radians(),
            aspect: 1.0,
            near: settings.near,
            far: settings.far,
            damping_factor: settings.damping_factor,
            rotate_speed: settings.rotate_speed,
            min_distance,
            max_distance,
            frame_distance_factor: settings.frame_distance_factor,
            frame_yaw: settings.frame_yaw,
            frame_pitch: settings.frame_pitch,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        }
    }

    /// Queue a rotation from a pointer drag (pixels).
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            tracing::warn!("Ignoring non-finite rotation ({dx}, {dy})");
            return;
        }
        self.pending_yaw += (dx * self.rotate_speed).to_radians();
        self.pending_pitch += (dy * self.rotate_speed).to_radians();
    }

    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            tracing::warn!("Ignoring non-finite zoom {delta}");
            return;
        }
        self.distance = (self.distance * (1.0 - delta)).clamp(self.min_distance, self.max_distance);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            tracing::warn!("Ignoring non-finite pan ({dx}, {dy})");
            return;
        }
        let right = self.right_vector();
        let up = self.up_vector();
        let offset = right * dx + up * dy;
        self.target += offset;
    }

    /// Advance damped motion by `dt` seconds. Returns true if the view changed.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.pending_yaw == 0.0 && self.pending_pitch == 0.0 {
            return false;
        }
        if !dt.is_finite() {
            tracing::warn!("Ignoring non-finite frame time {dt}");
            return false;
        }

        let share = if self.damping_factor <= 0.0 || self.damping_factor >= 1.0 {
            1.0
        } else {
            // frame-rate independent: `damping_factor` per 1/60 s
            let frames = (dt * 60.0).max(0.0);
            1.0 - (1.0 - self.damping_factor).powf(frames)
        };

        let dyaw = self.pending_yaw * share;
        let dpitch = self.pending_pitch * share;
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-1.5, 1.5);
        self.pending_yaw -= dyaw;
        self.pending_pitch -= dpitch;

        if self.pending_yaw.abs() < REST_EPSILON {
            self.pending_yaw = 0.0;
        }
        if self.pending_pitch.abs() < REST_EPSILON {
            self.pending_pitch = 0.0;
        }
        true
    }

    /// Drop any motion still being eased in.
    pub fn stop(&mut self) {
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
    }

    pub fn is_moving(&self) -> bool {
        self.pending_yaw != 0.0 || self.pending_pitch != 0.0
    }

    /// Place the camera for an assembly of the given largest extent, which is
    /// already centered on the origin.
    pub fn frame_extent(&mut self, max_extent: f32) {
        if !max_extent.is_finite() {
            tracing::warn!("Ignoring non-finite framing extent {max_extent}");
            return;
        }
        self.stop();
        self.distance =
            (max_extent * self.frame_distance_factor).clamp(self.min_distance, self.max_distance);
        self.yaw = self.frame_yaw;
        self.pitch = self.frame_pitch;
        self.target = Vec3::ZERO;
    }

    pub fn set_aspect(&mut self, size: ContainerSize) {
        if size.is_drawable() {
            self.aspect = size.aspect();
        }
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Project a world point to container coordinates (origin top-left).
    /// `z` of the result is the NDC depth. None if the point is behind the camera.
    pub fn project(&self, point: Vec3, size: ContainerSize) -> Option<Vec3> {
        let p = self.view_projection() * point.extend(1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        Some(Vec3::new(
            (ndc.x + 1.0) * 0.5 * size.width,
            (1.0 - ndc.y) * 0.5 * size.height,
            ndc.z,
        ))
    }

    /// Cast a ray from a container position (origin top-left) into the scene
    pub fn screen_ray(&self, x: f32, y: f32, size: ContainerSize) -> Ray {
        // Container → NDC [-1, 1]
        let ndc_x = x / size.width * 2.0 - 1.0;
        let ndc_y = 1.0 - y / size.height * 2.0;

        let vp_inv = self.view_projection().inverse();

        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}
