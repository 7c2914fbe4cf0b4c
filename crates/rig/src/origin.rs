use glam::{Quat, Vec3};
use rigstride_common::Transform;

use crate::mover::CharacterMover;

/// The XR rig: an origin transform plus the tracked camera pose within it.
///
/// The origin is what locomotion moves; the camera rides along as a child
/// pose supplied by head tracking outside this crate. An optional character
/// mover intercepts translations for ground collision; without one the
/// origin transform is translated directly.
pub struct XrRig {
    origin: Transform,
    camera_in_origin: Transform,
    mover: Option<Box<dyn CharacterMover>>,
}

impl XrRig {
    pub fn new(origin: Transform) -> Self {
        Self {
            origin,
            camera_in_origin: Transform::default(),
            mover: None,
        }
    }

    /// Attach a character mover that will carry out origin translations.
    pub fn with_mover(mut self, mover: Box<dyn CharacterMover>) -> Self {
        self.mover = Some(mover);
        self
    }

    pub fn origin(&self) -> &Transform {
        &self.origin
    }

    /// Camera pose in origin space. Head tracking owns this value.
    pub fn camera_in_origin(&self) -> &Transform {
        &self.camera_in_origin
    }

    /// Update the tracked camera pose (called by tracking, not locomotion).
    pub fn set_camera_in_origin(&mut self, pose: Transform) {
        self.camera_in_origin = pose;
    }

    pub fn has_mover(&self) -> bool {
        self.mover.is_some()
    }

    /// Whether the character mover reports ground contact. False without one.
    pub fn is_grounded(&self) -> bool {
        self.mover.as_ref().is_some_and(|m| m.is_grounded())
    }

    /// Camera position in world space.
    pub fn camera_world_position(&self) -> Vec3 {
        self.origin.transform_point(self.camera_in_origin.position)
    }

    /// Camera orientation in world space.
    pub fn camera_world_rotation(&self) -> Quat {
        self.origin.rotation * self.camera_in_origin.rotation
    }

    /// Camera forward direction in world space.
    pub fn camera_world_forward(&self) -> Vec3 {
        self.camera_world_rotation() * Vec3::Z
    }

    /// Camera right direction in world space.
    pub fn camera_world_right(&self) -> Vec3 {
        self.camera_world_rotation() * Vec3::X
    }

    /// Rotate the origin about the camera's world position, around the
    /// origin's own up axis. The camera's world position is unchanged; the
    /// origin orbits underneath it.
    pub fn rotate_around_camera_using_origin_up(&mut self, degrees: f32) {
        let axis = self.origin.up();
        self.rotate_around_camera_position(axis, degrees);
    }

    /// Rotate the origin about the camera's world position around an
    /// arbitrary axis.
    pub fn rotate_around_camera_position(&mut self, axis: Vec3, degrees: f32) {
        let pivot = self.camera_world_position();
        let rotation = Quat::from_axis_angle(axis.normalize(), degrees.to_radians());
        self.origin.position = pivot + rotation * (self.origin.position - pivot);
        self.origin.rotation = (rotation * self.origin.rotation).normalize();
        tracing::trace!(degrees, "rotated origin around camera");
    }

    /// Apply a world-space translation to the origin. Routed through the
    /// character mover when one is attached.
    pub fn move_origin(&mut self, motion: Vec3) {
        match self.mover.as_mut() {
            Some(mover) => mover.move_by(&mut self.origin, motion),
            None => self.origin.position += motion,
        }
        tracing::trace!(?motion, "moved origin");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mover::KinematicBody;
    use rigstride_common::Transform;

    fn rig_with_camera_at(offset: Vec3) -> XrRig {
        let mut rig = XrRig::new(Transform::default());
        rig.set_camera_in_origin(Transform::from_position(offset));
        rig
    }

    #[test]
    fn camera_world_position_includes_origin() {
        let mut rig = XrRig::new(Transform::from_position(Vec3::new(3.0, 0.0, 0.0)));
        rig.set_camera_in_origin(Transform::from_position(Vec3::new(0.0, 1.7, 0.0)));
        assert_eq!(rig.camera_world_position(), Vec3::new(3.0, 1.7, 0.0));
    }

    #[test]
    fn rotate_around_camera_preserves_camera_world_position() {
        let mut rig = rig_with_camera_at(Vec3::new(0.5, 1.7, 0.2));
        let before = rig.camera_world_position();
        rig.rotate_around_camera_using_origin_up(45.0);
        let after = rig.camera_world_position();
        assert!((before - after).length() < 1e-4);
    }

    #[test]
    fn rotate_changes_origin_heading() {
        let mut rig = rig_with_camera_at(Vec3::new(0.0, 1.7, 0.0));
        rig.rotate_around_camera_using_origin_up(90.0);
        let fwd = rig.origin().forward();
        // 90 degrees about up carries +Z onto +X.
        assert!((fwd - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn move_origin_without_mover_translates_directly() {
        let mut rig = XrRig::new(Transform::default());
        rig.move_origin(Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(rig.origin().position, Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn move_origin_with_mover_clamps_to_ground() {
        let mut rig =
            XrRig::new(Transform::default()).with_mover(Box::new(KinematicBody::default()));
        rig.move_origin(Vec3::new(0.0, -5.0, 1.0));
        assert_eq!(rig.origin().position.y, 0.0);
        assert!(rig.is_grounded());
    }
}
