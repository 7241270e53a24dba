//! Pick rays and hits
//!
//! The manager asks a [`Raycaster`] for every hit along the pointer ray and
//! does the sorting and filtering itself. [`GizmoColliders`] is the
//! built-in raycaster over live gizmo geometry.

mod colliders;
pub mod collision;

pub use colliders::{Collider, ColliderShape, GizmoColliders};

use glam::Vec3;
use rth_core::Ray;

use crate::ids::InteractorRef;

/// Bit set of collision layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches every layer
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// True if the masks share a layer
    pub fn intersects(&self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

/// What a ray hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOwner {
    /// A gizmo control
    Interactor(InteractorRef),
    /// Anything else on the queried layers, identified by the host
    Other(u64),
}

/// One ray hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Distance from the ray origin
    pub distance: f32,
    /// World hit point
    pub point: Vec3,
    /// Hit collider's owner
    pub owner: HitOwner,
}

/// Ray queries against colliders on some layers
pub trait Raycaster {
    /// All hits within `max_distance` on layers in `mask`, in any order
    fn raycast(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Vec<RaycastHit>;
}

/// Nearest hit that belongs to an interactor
pub fn nearest_interactor_hit(
    mut hits: Vec<RaycastHit>,
    max_hits: usize,
) -> Option<(InteractorRef, Vec3)> {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits.into_iter().take(max_hits).find_map(|hit| match hit.owner {
        HitOwner::Interactor(interactor) => Some((interactor, hit.point)),
        HitOwner::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{HandleId, InteractorKind};
    use rth_core::Axis;

    fn hit(distance: f32, owner: HitOwner) -> RaycastHit {
        RaycastHit {
            distance,
            point: Vec3::new(distance, 0.0, 0.0),
            owner,
        }
    }

    #[test]
    fn test_nearest_interactor_skips_other_hits() {
        let handle = HandleId::new();
        let near = InteractorRef::new(handle, InteractorKind::PositionAxis(Axis::X));
        let far = InteractorRef::new(handle, InteractorKind::RotationAxis(Axis::Y));

        let hits = vec![
            hit(5.0, HitOwner::Interactor(far)),
            hit(1.0, HitOwner::Other(7)),
            hit(3.0, HitOwner::Interactor(near)),
        ];
        let (found, point) = nearest_interactor_hit(hits, 16).unwrap();
        assert_eq!(found, near);
        assert_eq!(point, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_hit_limit() {
        let handle = HandleId::new();
        let target = InteractorRef::new(handle, InteractorKind::ScaleUniform);
        let hits = vec![
            hit(1.0, HitOwner::Other(1)),
            hit(2.0, HitOwner::Interactor(target)),
        ];
        assert!(nearest_interactor_hit(hits.clone(), 1).is_none());
        assert!(nearest_interactor_hit(hits, 2).is_some());
    }

    #[test]
    fn test_layer_mask() {
        assert!(LayerMask(0b1000).intersects(LayerMask::ALL));
        assert!(!LayerMask(0b1000).intersects(LayerMask(0b0001)));
    }
}
