//! Ray/shape intersection tests for gizmo colliders
//!
//! Every test returns the ray parameter `t` of the nearest hit in front of
//! the ray origin, so the hit point is `ray.point_at(t)`.

use glam::Vec3;
use rth_core::constants::PLANE_PARALLEL_EPSILON;
use rth_core::Ray;

/// Ray against a finite, uncapped cylinder.
///
/// The ray and the cylinder axis are projected into the plane perpendicular
/// to the axis, which turns the surface test into a 2D quadratic:
///
/// ```text
/// P(t) = origin + t * dir
/// |P(t) - axis_projection(P(t))| = radius
/// ```
///
/// A hit must also lie between `start` and `end` along the axis.
pub fn ray_cylinder(ray: &Ray, start: Vec3, end: Vec3, radius: f32) -> Option<f32> {
    let length = (end - start).length();
    if length <= f32::EPSILON {
        return None;
    }
    let axis = (end - start) / length;

    let d = ray.direction - axis * ray.direction.dot(axis);
    let offset = ray.origin - start;
    let o = offset - axis * offset.dot(axis);

    let a = d.dot(d);
    // ray runs along the axis
    if a <= f32::EPSILON {
        return None;
    }
    let b = 2.0 * d.dot(o);
    let c = o.dot(o) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let near = (-b - sqrt_disc) / (2.0 * a);
    let far = (-b + sqrt_disc) / (2.0 * a);

    [near, far].into_iter().find(|&t| {
        if t < 0.0 {
            return false;
        }
        let along = (ray.point_at(t) - start).dot(axis);
        (0.0..=length).contains(&along)
    })
}

/// Ray against a flat ring (annulus) of the given radius and half width.
pub fn ray_ring(ray: &Ray, center: Vec3, normal: Vec3, radius: f32, thickness: f32) -> Option<f32> {
    let t = ray_plane_t(ray, center, normal)?;
    let distance_from_center = (ray.point_at(t) - center).length();
    if (distance_from_center - radius).abs() <= thickness {
        Some(t)
    } else {
        None
    }
}

/// Ray against a square of side `2 * half_size` spanned by `u` and `v`.
pub fn ray_quad(ray: &Ray, center: Vec3, u: Vec3, v: Vec3, half_size: f32) -> Option<f32> {
    let normal = u.cross(v).normalize_or_zero();
    if normal == Vec3::ZERO {
        return None;
    }
    let t = ray_plane_t(ray, center, normal)?;
    let local = ray.point_at(t) - center;
    if local.dot(u).abs() <= half_size && local.dot(v).abs() <= half_size {
        Some(t)
    } else {
        None
    }
}

/// Ray against a sphere. A ray starting inside reports the exit point.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_disc = discriminant.sqrt();
    [-b - sqrt_disc, -b + sqrt_disc]
        .into_iter()
        .find(|&t| t >= 0.0)
}

fn ray_plane_t(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < PLANE_PARALLEL_EPSILON {
        return None;
    }
    let t = (point - ray.origin).dot(normal) / denom;
    (t >= 0.0).then_some(t)
}
