//! Ray and plane geometry used by the handle interactors
//!
//! All directions are expected to be normalized unless stated otherwise.

use glam::Vec3;

use crate::constants::{CLOSEST_POINT_PRECISION, PLANE_PARALLEL_EPSILON};

/// A half-line in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Vec3,
    /// Direction of the ray (normalized on construction).
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    ///
    /// A zero direction stays zero; every query on such a ray degenerates to
    /// the origin.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Returns the point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A plane in 3D space (n·p + d = 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal vector of the plane.
    pub normal: Vec3,
    /// Distance from origin along the normal.
    pub distance: f32,
}

impl Plane {
    /// Creates a new plane from normal and distance.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Creates a plane from a point and normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize_or_zero();
        Self {
            normal: n,
            distance: -n.dot(point),
        }
    }

    /// Returns the signed distance from a point to the plane.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Projects `point` onto the plane.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.distance_to_point(point)
    }

    /// Intersects a ray with the plane.
    ///
    /// Returns `None` when the ray is parallel to the plane or the plane lies
    /// behind the ray origin.
    pub fn raycast(&self, ray: &Ray) -> Option<Vec3> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PLANE_PARALLEL_EPSILON {
            return None;
        }

        let t = -self.distance_to_point(ray.origin) / denom;
        if t < 0.0 {
            return None;
        }

        Some(ray.point_at(t))
    }
}

/// Parameter `t` of the point on `ray` closest to `other`.
///
/// Solves the closest points between two skew lines in closed form. Both ray
/// directions must be normalized. When the rays are nearly parallel (the
/// system is ill-conditioned) this returns `0.0`, i.e. the origin of `ray`.
///
/// ```text
/// a = ray.origin, b = ray.direction, c = other.origin, d = other.direction
/// t = (a·b − b·c + (b·d)(c·d − a·d)) / ((b·d)² − 1)
/// ```
pub fn closest_point_on_ray(ray: &Ray, other: &Ray) -> f32 {
    closest_point_on_ray_with_precision(ray, other, CLOSEST_POINT_PRECISION)
}

/// [`closest_point_on_ray`] with an explicit parallel threshold.
pub fn closest_point_on_ray_with_precision(ray: &Ray, other: &Ray, precision: f32) -> f32 {
    let bd = ray.direction.dot(other.direction);
    let cd = other.origin.dot(other.direction);
    let ad = ray.origin.dot(other.direction);
    let bc = ray.direction.dot(other.origin);
    let ab = ray.origin.dot(ray.direction);

    let bottom = bd * bd - 1.0;
    if bottom.abs() < precision {
        return 0.0;
    }

    let top = ab - bc + bd * (cd - ad);
    top / bottom
}

/// Signed angle (radians) of `direction` inside the plane spanned by
/// `tangent` and `bitangent`.
///
/// Positive angles turn from `tangent` towards `bitangent`.
pub fn signed_angle_in_plane(direction: Vec3, tangent: Vec3, bitangent: Vec3) -> f32 {
    let x = direction.dot(tangent);
    let y = direction.dot(bitangent);
    y.atan2(x)
}
