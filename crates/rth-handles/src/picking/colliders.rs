use glam::Vec3;
use rth_core::constants::HANDLE_LAYER;
use rth_core::Ray;

use super::collision::{ray_cylinder, ray_quad, ray_ring, ray_sphere};
use super::{HitOwner, LayerMask, RaycastHit, Raycaster};
use crate::constants::{
    AXIS_LENGTH, AXIS_PICK_RADIUS, PLANE_HALF_SIZE, RING_PICK_THICKNESS, RING_RADIUS,
    SCALE_AXIS_LENGTH, UNIFORM_SCALE_RADIUS,
};
use crate::handle::HandleGroup;
use crate::ids::{InteractorKind, InteractorRef};
use crate::manager::TransformHandleManager;

/// Pickable shape in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Finite cylinder around a segment
    Cylinder {
        /// Segment start
        start: Vec3,
        /// Segment end
        end: Vec3,
        /// Pick radius
        radius: f32,
    },
    /// Flat annulus
    Ring {
        /// Ring center
        center: Vec3,
        /// Ring plane normal
        normal: Vec3,
        /// Center-line radius
        radius: f32,
        /// Half width of the band
        thickness: f32,
    },
    /// Square spanned by two unit vectors
    Quad {
        /// Square center
        center: Vec3,
        /// First edge direction
        u: Vec3,
        /// Second edge direction
        v: Vec3,
        /// Half the side length
        half_size: f32,
    },
    /// Ball
    Sphere {
        /// Ball center
        center: Vec3,
        /// Ball radius
        radius: f32,
    },
}

impl ColliderShape {
    /// Ray parameter of the nearest hit
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            ColliderShape::Cylinder { start, end, radius } => ray_cylinder(ray, start, end, radius),
            ColliderShape::Ring {
                center,
                normal,
                radius,
                thickness,
            } => ray_ring(ray, center, normal, radius, thickness),
            ColliderShape::Quad {
                center,
                u,
                v,
                half_size,
            } => ray_quad(ray, center, u, v, half_size),
            ColliderShape::Sphere { center, radius } => ray_sphere(ray, center, radius),
        }
    }
}

/// A shape owned by an interactor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Owning interactor
    pub owner: InteractorRef,
    /// World-space shape
    pub shape: ColliderShape,
}

/// Snapshot of every pickable gizmo control
///
/// Built from the handles' last placement. All colliders live on the handle
/// layer.
#[derive(Debug, Clone, Default)]
pub struct GizmoColliders {
    colliders: Vec<Collider>,
}

impl GizmoColliders {
    /// Colliders of every handle in the manager
    pub fn from_manager(manager: &TransformHandleManager) -> Self {
        Self::from_handles(manager.handles())
    }

    /// Colliders of the given handles
    pub fn from_handles<'a>(handles: impl IntoIterator<Item = &'a HandleGroup>) -> Self {
        let mut colliders = Vec::new();
        for handle in handles {
            collect_handle(handle, &mut colliders);
        }
        Self { colliders }
    }

    /// All colliders
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Collider of one interactor, if it is pickable
    pub fn get(&self, owner: InteractorRef) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.owner == owner)
    }
}

fn collect_handle(handle: &HandleGroup, out: &mut Vec<Collider>) {
    let placement = handle.placement();
    let origin = placement.position;
    let s = placement.scale;

    for interactor in handle.interactors() {
        let kind = interactor.kind();
        let shape = match kind {
            InteractorKind::PositionAxis(axis) => {
                if !placement.is_axis_visible(axis) {
                    continue;
                }
                ColliderShape::Cylinder {
                    start: origin,
                    end: placement.to_world(axis.direction() * AXIS_LENGTH),
                    radius: AXIS_PICK_RADIUS * s,
                }
            }
            InteractorKind::PositionPlane(normal) => {
                let (a, b) = normal.plane_axes();
                ColliderShape::Quad {
                    center: placement.to_world(placement.plane_offset(normal)),
                    u: placement.axis_direction(a),
                    v: placement.axis_direction(b),
                    half_size: PLANE_HALF_SIZE * s,
                }
            }
            InteractorKind::RotationAxis(axis) => ColliderShape::Ring {
                center: origin,
                normal: placement.axis_direction(axis),
                radius: RING_RADIUS * s,
                thickness: RING_PICK_THICKNESS * s,
            },
            InteractorKind::ScaleAxis(axis) => {
                let length = SCALE_AXIS_LENGTH * (1.0 + interactor.delta());
                ColliderShape::Cylinder {
                    start: origin,
                    end: placement.to_world(axis.direction() * length),
                    radius: AXIS_PICK_RADIUS * s,
                }
            }
            InteractorKind::ScaleUniform => ColliderShape::Sphere {
                center: origin,
                radius: UNIFORM_SCALE_RADIUS * s,
            },
        };
        out.push(Collider {
            owner: handle.interactor_ref(kind),
            shape,
        });
    }
}

impl Raycaster for GizmoColliders {
    fn raycast(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Vec<RaycastHit> {
        if !mask.intersects(LayerMask(HANDLE_LAYER)) {
            return Vec::new();
        }
        self.colliders
            .iter()
            .filter_map(|collider| {
                let t = collider.shape.intersect(ray)?;
                (t <= max_distance).then(|| RaycastHit {
                    distance: t,
                    point: ray.point_at(t),
                    owner: HitOwner::Interactor(collider.owner),
                })
            })
            .collect()
    }
}
