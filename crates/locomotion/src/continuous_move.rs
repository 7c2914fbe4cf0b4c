use glam::{Quat, Vec2, Vec3};
use rigstride_common::{ProviderId, Transform, approx_eq, approx_zero_vec2, approx_zero_vec3};
use rigstride_input::InputSource;
use rigstride_rig::{GRAVITY, XrRig};
use serde::{Deserialize, Serialize};

use crate::arbiter::{LocomotionArbiter, RequestResult};
use crate::phase::LocomotionPhase;
use crate::provider::{ConfigError, LocomotionProvider, ensure_non_negative};

/// When gravity (and with it the whole move) is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityApplicationMode {
    /// Apply only while a horizontal move is being attempted, or while
    /// vertical velocity from an earlier attempt is still draining.
    #[default]
    AttemptingMove,
    /// Apply every tick, with or without input.
    Immediately,
}

/// Configuration for smooth stick-driven translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinuousMoveConfig {
    /// Movement speed in units per time-unit.
    pub move_speed: f32,
    /// Whether the x input axis contributes sideways motion.
    pub enable_strafe: bool,
    /// Move along the full forward-source direction instead of the ground plane.
    pub enable_fly: bool,
    /// Accumulate gravity when a character mover is present and airborne.
    pub use_gravity: bool,
    pub gravity_application_mode: GravityApplicationMode,
}

impl Default for ContinuousMoveConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            enable_strafe: true,
            enable_fly: false,
            use_gravity: true,
            gravity_application_mode: GravityApplicationMode::default(),
        }
    }
}

/// Smooth translation provider: input maps to a world-space move relative
/// to the camera (or an overriding forward source), applied under the
/// arbiter's exclusive lock.
pub struct ContinuousMoveProvider {
    id: ProviderId,
    phase: LocomotionPhase,
    config: ContinuousMoveConfig,
    input: Box<dyn InputSource>,
    /// World-space frame overriding the camera as the input reference.
    /// The host refreshes this when the source transform changes.
    forward_source: Option<Transform>,
    vertical_velocity: Vec3,
}

impl ContinuousMoveProvider {
    pub fn new(
        config: ContinuousMoveConfig,
        input: Box<dyn InputSource>,
    ) -> Result<Self, ConfigError> {
        ensure_non_negative("move_speed", config.move_speed)?;
        Ok(Self {
            id: ProviderId::new(),
            phase: LocomotionPhase::Idle,
            config,
            input,
            forward_source: None,
            vertical_velocity: Vec3::ZERO,
        })
    }

    /// Override the camera as the frame the input direction is relative to.
    pub fn set_forward_source(&mut self, source: Option<Transform>) {
        self.forward_source = source;
    }

    pub fn vertical_velocity(&self) -> Vec3 {
        self.vertical_velocity
    }

    /// World-space translation the current input asks for, before gravity.
    fn compute_desired_move(&self, input: Vec2, rig: &XrRig, dt: f32) -> Vec3 {
        if approx_zero_vec2(input) {
            return Vec3::ZERO;
        }

        let x = if self.config.enable_strafe { input.x } else { 0.0 };
        let input_move = Vec3::new(x, 0.0, input.y).clamp_length_max(1.0);

        // Frame of reference the input direction is relative to.
        let (frame_forward, frame_right, frame_up) = match &self.forward_source {
            Some(source) => (source.forward(), source.right(), source.up()),
            None => {
                let rotation = rig.camera_world_rotation();
                (rotation * Vec3::Z, rotation * Vec3::X, rotation * Vec3::Y)
            }
        };

        let origin = rig.origin();
        let origin_up = origin.up();
        // Speed scales with the rig so a resized player keeps the same felt pace.
        let speed_factor = self.config.move_speed * dt * origin.scale.x;

        if self.config.enable_fly {
            let combined = input_move.x * frame_right + input_move.z * frame_forward;
            return combined * speed_factor;
        }

        // Looking straight up or down leaves no usable forward; borrow the
        // frame's up axis instead.
        let mut forward = frame_forward;
        if approx_eq(forward.dot(origin_up).abs(), 1.0) {
            forward = -frame_up;
        }

        let projected = forward - origin_up * forward.dot(origin_up);
        let Some(projected) = projected.try_normalize() else {
            return Vec3::ZERO;
        };

        let heading = Quat::from_rotation_arc(origin.forward(), projected);
        let translation_in_rig_space = heading * input_move * speed_factor;
        origin.transform_direction(translation_in_rig_space)
    }

    /// Step gravity, then apply the motion under the exclusive lock.
    /// Returns true when the rig was actually moved.
    fn move_rig(
        &mut self,
        translation: Vec3,
        dt: f32,
        arbiter: &mut LocomotionArbiter,
        rig: &mut XrRig,
    ) -> bool {
        let mut motion = translation;

        if rig.has_mover() {
            if rig.is_grounded() || !self.config.use_gravity || self.config.enable_fly {
                self.vertical_velocity = Vec3::ZERO;
            } else {
                self.vertical_velocity += GRAVITY * dt;
            }
            motion += self.vertical_velocity * dt;
        }

        // Negligible deltas never acquire the lock.
        if approx_zero_vec3(motion) {
            return false;
        }

        match arbiter.request_exclusive_operation(self.id) {
            RequestResult::Success => {
                rig.move_origin(motion);
                if arbiter.finish_exclusive_operation(self.id) != RequestResult::Success {
                    tracing::warn!("release after move was refused");
                }
                true
            }
            RequestResult::Busy => {
                tracing::trace!("arbiter busy; move skipped this tick");
                false
            }
            RequestResult::Error => {
                tracing::warn!("move request rejected by arbiter");
                false
            }
        }
    }
}

impl LocomotionProvider for ContinuousMoveProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn phase(&self) -> LocomotionPhase {
        self.phase
    }

    fn tick(&mut self, dt: f32, arbiter: &mut LocomotionArbiter, rig: Option<&mut XrRig>) {
        let Some(rig) = rig else {
            self.phase = self.phase.advance_continuous(false);
            return;
        };

        let input = self.input.read();
        let translation = self.compute_desired_move(input, rig, dt);

        let moved = match self.config.gravity_application_mode {
            GravityApplicationMode::Immediately => self.move_rig(translation, dt, arbiter, rig),
            GravityApplicationMode::AttemptingMove => {
                if !approx_zero_vec2(input) || !approx_zero_vec3(self.vertical_velocity) {
                    self.move_rig(translation, dt, arbiter, rig)
                } else {
                    false
                }
            }
        };

        self.phase = self.phase.advance_continuous(moved);
    }
}
