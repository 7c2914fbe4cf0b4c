use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier a locomotion provider presents to the arbiter.
///
/// The nil id stands in for a missing or unset provider reference and is
/// rejected by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProviderId(pub Uuid);

impl ProviderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero id, treated as an invalid provider reference.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ProviderId {
    fn default() -> Self {
        Self::new()
    }
}

/// Spatial transform: position, rotation, scale.
///
/// Directions follow the +Z forward, +Y up, +X right convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// World-space forward direction (+Z rotated by this transform).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// World-space right direction (+X rotated by this transform).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// World-space up direction (+Y rotated by this transform).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Rotate a local-space direction into world space. Ignores scale.
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Transform a local-space point into world space (scale, then rotate,
    /// then translate).
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * (local * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn provider_id_uniqueness() {
        let a = ProviderId::new();
        let b = ProviderId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn nil_id_is_nil() {
        assert!(ProviderId::nil().is_nil());
        assert!(!ProviderId::new().is_nil());
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn identity_directions() {
        let t = Transform::default();
        assert_eq!(t.forward(), Vec3::Z);
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
    }

    #[test]
    fn yaw_rotates_forward() {
        let t = Transform {
            rotation: Quat::from_rotation_y(FRAC_PI_2),
            ..Transform::default()
        };
        // 90 degrees about +Y carries +Z onto +X.
        assert!((t.forward() - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn transform_point_applies_scale_then_rotation() {
        let t = Transform {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::from_rotation_y(FRAC_PI_2),
            scale: Vec3::splat(2.0),
        };
        let p = t.transform_point(Vec3::Z);
        assert!((p - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);
    }
}
