//! XR rig origin: the movable representation of the player in world space.
//!
//! # Invariants
//! - The camera pose is expressed in origin space; tracking writes it, the
//!   rig only reads it.
//! - Rotating around the camera preserves the camera's world position.
//! - Locomotion mutates the origin only through the rig's apply primitives.

pub mod mover;
pub mod origin;

pub use mover::{CharacterMover, GRAVITY, KinematicBody};
pub use origin::XrRig;

pub fn crate_info() -> &'static str {
    "rigstride-rig v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("rig"));
    }
}
