//! Perspective camera for picking and gizmo sizing

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::math::Ray;

/// Identifies a camera owned by the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraId(pub Uuid);

impl CameraId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CameraId {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of the active camera.
///
/// Cameras can disappear (scene transitions); `camera` then returns `None`
/// and the caller is expected to re-resolve through `main_camera`.
pub trait CameraProvider {
    /// The scene's main camera, if there is one.
    fn main_camera(&self) -> Option<CameraId>;

    /// Current state of a camera, `None` once it no longer exists.
    fn camera(&self, id: CameraId) -> Option<Camera>;
}

/// Perspective camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in pixels; screen origin is the top-left corner
    pub viewport: Vec2,
}

impl Camera {
    /// Create a Y-up camera looking from `position` at `target`
    pub fn look_at(position: Vec3, target: Vec3, viewport: Vec2) -> Self {
        let viewport = viewport.max(Vec2::ONE);
        Self {
            position,
            target,
            up: Vec3::Y,
            fov: 60.0_f32.to_radians(),
            aspect: viewport.x / viewport.y,
            near: 0.1,
            far: 1000.0,
            viewport,
        }
    }

    /// Follow a viewport resize
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport.max(Vec2::ONE);
        self.aspect = self.viewport.x / self.viewport.y;
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the near plane through a screen position.
    ///
    /// `screen` is in pixels with the origin at the top-left corner of a
    /// `size` viewport.
    pub fn screen_to_ray(&self, screen: Vec2, size: Vec2) -> Ray {
        let ndc = Vec2::new(2.0 * screen.x / size.x - 1.0, 1.0 - 2.0 * screen.y / size.y);
        // perspective_rh maps depth to 0..1
        let unproject = self.view_projection().inverse();
        let near = unproject.project_point3(ndc.extend(0.0));
        let far = unproject.project_point3(ndc.extend(1.0));
        Ray::new(near, far - near)
    }

    /// World ray under a pointer position in this camera's viewport
    pub fn pointer_ray(&self, pointer: Vec2) -> Ray {
        self.screen_to_ray(pointer, self.viewport)
    }

    /// Project a world point to screen coordinates.
    ///
    /// Returns `None` for points behind the camera.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }

    /// Distance from the near clipping plane to `point`
    pub fn distance_to_near_plane(&self, point: Vec3) -> f32 {
        ((point - self.position).dot(self.forward()) - self.near).abs()
    }

    /// World-space length that spans `pixels` screen pixels at `point`.
    ///
    /// Used to keep gizmos at a constant on-screen size.
    pub fn world_size_for_pixels(&self, pixels: f32, point: Vec3) -> f32 {
        let size_at_unit_distance = 2.0 * (self.fov * 0.5).tan() * pixels / self.viewport.y;
        size_at_unit_distance * self.distance_to_near_plane(point)
    }
}

/// A [`CameraProvider`] backed by a single camera slot.
///
/// Hosts without a camera registry of their own can keep their camera here;
/// `clear` simulates the camera going away.
#[derive(Debug, Clone, Default)]
pub struct MainCamera {
    id: Option<CameraId>,
    camera: Option<Camera>,
}

impl MainCamera {
    pub fn new(camera: Camera) -> Self {
        Self {
            id: Some(CameraId::new()),
            camera: Some(camera),
        }
    }

    /// Replace the camera; the new camera gets a fresh id
    pub fn replace(&mut self, camera: Camera) -> CameraId {
        let id = CameraId::new();
        self.id = Some(id);
        self.camera = Some(camera);
        id
    }

    /// Mutable access, e.g. to follow viewport resizes
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    pub fn clear(&mut self) {
        self.id = None;
        self.camera = None;
    }
}

impl CameraProvider for MainCamera {
    fn main_camera(&self) -> Option<CameraId> {
        self.id
    }

    fn camera(&self, id: CameraId) -> Option<Camera> {
        if self.id == Some(id) { self.camera } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.pointer_ray(Vec2::new(400.0, 300.0));
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn test_world_to_screen_inverts_pointer_ray() {
        let cam = camera();
        let point = Vec3::new(1.5, -0.5, 0.0);
        let screen = cam.world_to_screen(point).unwrap();
        let ray = cam.pointer_ray(screen);
        let t = (point - ray.origin).dot(ray.direction);
        assert!(ray.point_at(t).abs_diff_eq(point, 1e-3));
    }

    #[test]
    fn test_point_behind_camera_has_no_screen_position() {
        assert!(camera().world_to_screen(Vec3::new(0.0, 0.0, 20.0)).is_none());
    }

    #[test]
    fn test_world_size_grows_with_distance() {
        let cam = camera();
        let near = cam.world_size_for_pixels(192.0, Vec3::new(0.0, 0.0, 5.0));
        let far = cam.world_size_for_pixels(192.0, Vec3::new(0.0, 0.0, -10.0));
        assert!(far > near);
        // 60° fov, 600 px viewport, 9.9 units from the near plane
        let expected = 2.0 * 30.0_f32.to_radians().tan() * 192.0 / 600.0 * 9.9;
        assert_relative_eq!(cam.world_size_for_pixels(192.0, Vec3::ZERO), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_resize_keeps_center_ray() {
        let mut cam = camera();
        cam.set_viewport(Vec2::new(1024.0, 512.0));
        assert_relative_eq!(cam.aspect, 2.0);
        let ray = cam.pointer_ray(Vec2::new(512.0, 256.0));
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn test_main_camera_loss() {
        let mut main = MainCamera::new(camera());
        let id = main.main_camera().unwrap();
        assert!(main.camera(id).is_some());

        main.clear();
        assert!(main.camera(id).is_none());
        assert!(main.main_camera().is_none());
    }
}
