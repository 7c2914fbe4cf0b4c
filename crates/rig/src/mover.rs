use glam::Vec3;
use rigstride_common::Transform;

/// World gravity acceleration in units per second squared.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// A capsule-collider-style body that carries out origin translations.
///
/// Implementations resolve the motion against their collision world and
/// apply the result to the origin transform, keeping `is_grounded` current.
pub trait CharacterMover {
    /// Whether the body was in ground contact after the last move.
    fn is_grounded(&self) -> bool;

    /// Resolve `motion` and apply the outcome to `origin`.
    fn move_by(&mut self, origin: &mut Transform, motion: Vec3);
}

/// Minimal mover with an infinite ground plane at y = 0.
///
/// Enough collision response for demos and tests: horizontal motion passes
/// through, downward motion is clamped at the plane and flips the body
/// grounded.
#[derive(Debug, Default)]
pub struct KinematicBody {
    grounded: bool,
}

impl KinematicBody {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterMover for KinematicBody {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, origin: &mut Transform, motion: Vec3) {
        origin.position += motion;
        if origin.position.y <= 0.0 {
            origin.position.y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_starts_airborne() {
        let body = KinematicBody::new();
        assert!(!body.is_grounded());
    }

    #[test]
    fn falling_onto_plane_grounds_the_body() {
        let mut body = KinematicBody::new();
        let mut origin = Transform::from_position(Vec3::new(0.0, 2.0, 0.0));
        body.move_by(&mut origin, Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(origin.position.y, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn rising_leaves_the_ground() {
        let mut body = KinematicBody::new();
        let mut origin = Transform::default();
        body.move_by(&mut origin, Vec3::ZERO);
        assert!(body.is_grounded());
        body.move_by(&mut origin, Vec3::new(0.0, 1.0, 0.0));
        assert!(!body.is_grounded());
    }

    #[test]
    fn horizontal_motion_passes_through() {
        let mut body = KinematicBody::new();
        let mut origin = Transform::default();
        body.move_by(&mut origin, Vec3::new(2.0, 0.0, -1.0));
        assert_eq!(origin.position, Vec3::new(2.0, 0.0, -1.0));
    }
}
