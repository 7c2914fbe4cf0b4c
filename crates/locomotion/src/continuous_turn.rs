use glam::Vec2;
use rigstride_common::{ProviderId, approx_zero, approx_zero_vec2};
use rigstride_input::InputSource;
use rigstride_rig::XrRig;
use serde::{Deserialize, Serialize};

use crate::arbiter::{LocomotionArbiter, RequestResult};
use crate::cardinal::{Cardinal, nearest_cardinal};
use crate::phase::LocomotionPhase;
use crate::provider::{ConfigError, LocomotionProvider, ensure_non_negative};

/// Configuration for smooth stick-driven yaw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinuousTurnConfig {
    /// Turn rate in degrees per time-unit at full stick deflection.
    pub turn_speed: f32,
}

impl Default for ContinuousTurnConfig {
    fn default() -> Self {
        Self { turn_speed: 60.0 }
    }
}

/// Smooth yaw provider: East/West input drives a signed per-tick rotation
/// of the rig about the camera, around the origin's up axis.
pub struct ContinuousTurnProvider {
    id: ProviderId,
    phase: LocomotionPhase,
    config: ContinuousTurnConfig,
    input: Box<dyn InputSource>,
}

impl ContinuousTurnProvider {
    pub fn new(
        config: ContinuousTurnConfig,
        input: Box<dyn InputSource>,
    ) -> Result<Self, ConfigError> {
        ensure_non_negative("turn_speed", config.turn_speed)?;
        Ok(Self {
            id: ProviderId::new(),
            phase: LocomotionPhase::Idle,
            config,
            input,
        })
    }

    /// Signed degrees of yaw this tick's input asks for. North/South
    /// deflection turns nothing.
    fn turn_amount(&self, input: Vec2, dt: f32) -> f32 {
        if approx_zero_vec2(input) {
            return 0.0;
        }
        match nearest_cardinal(input) {
            Cardinal::East | Cardinal::West => {
                input.length() * input.x.signum() * self.config.turn_speed * dt
            }
            Cardinal::North | Cardinal::South => 0.0,
        }
    }
}

impl LocomotionProvider for ContinuousTurnProvider {
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
        let amount = self.turn_amount(input, dt);

        let mut turned = false;
        if !approx_zero(amount) {
            match arbiter.request_exclusive_operation(self.id) {
                RequestResult::Success => {
                    rig.rotate_around_camera_using_origin_up(amount);
                    turned = true;
                    if arbiter.finish_exclusive_operation(self.id) != RequestResult::Success {
                        tracing::warn!("release after turn was refused");
                    }
                }
                RequestResult::Busy => {
                    tracing::trace!("arbiter busy; turn skipped this tick");
                }
                RequestResult::Error => {
                    tracing::warn!("turn request rejected by arbiter");
                }
            }
        }

        self.phase = self.phase.advance_continuous(turned);
    }
}
