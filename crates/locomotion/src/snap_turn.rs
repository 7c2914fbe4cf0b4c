use glam::Vec2;
use rigstride_common::{ProviderId, approx_zero, approx_zero_vec2};
use rigstride_input::InputSource;
use rigstride_rig::XrRig;
use serde::{Deserialize, Serialize};

use crate::arbiter::{LocomotionArbiter, RequestResult};
use crate::cardinal::{Cardinal, nearest_cardinal};
use crate::phase::LocomotionPhase;
use crate::provider::{ConfigError, LocomotionProvider, ensure_non_negative};

/// Configuration for discrete-angle turning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapTurnConfig {
    /// Degrees applied per snap.
    pub turn_amount: f32,
    /// Time-units after a snap during which new snaps are suppressed.
    pub debounce_time: f32,
    /// Time-units between arming and applying a snap.
    pub delay_time: f32,
    /// East/West input snaps left/right.
    pub enable_turn_left_right: bool,
    /// South input snaps a full 180.
    pub enable_turn_around: bool,
}

impl Default for SnapTurnConfig {
    fn default() -> Self {
        Self {
            turn_amount: 45.0,
            debounce_time: 0.5,
            delay_time: 0.0,
            enable_turn_left_right: true,
            enable_turn_around: true,
        }
    }
}

/// Discrete yaw provider: a flick of the stick applies one fixed-angle
/// rotation, gated by a four-phase machine and a debounce timer.
///
/// Phase walk: `Idle` arms to `Started` on nonzero input (latching the
/// amount), `Started` holds until the configured delay elapses, `Moving`
/// applies the full rotation once under the exclusive lock, the following
/// tick reads `Done`, and the one after that `Idle`. The debounce timer is
/// independent of the phases: until it expires, `Idle` refuses to arm.
pub struct SnapTurnProvider {
    id: ProviderId,
    phase: LocomotionPhase,
    config: SnapTurnConfig,
    input: Box<dyn InputSource>,
    /// Amount latched at arm time, so releasing the stick during the delay
    /// still turns.
    pending_amount: f32,
    /// Clock stamp of the last applied snap; None once debounce has expired.
    last_turn_at: Option<f32>,
    delay_started: f32,
    clock: f32,
}

impl SnapTurnProvider {
    pub fn new(config: SnapTurnConfig, input: Box<dyn InputSource>) -> Result<Self, ConfigError> {
        ensure_non_negative("turn_amount", config.turn_amount)?;
        ensure_non_negative("debounce_time", config.debounce_time)?;
        ensure_non_negative("delay_time", config.delay_time)?;
        Ok(Self {
            id: ProviderId::new(),
            phase: LocomotionPhase::Idle,
            config,
            input,
            pending_amount: 0.0,
            last_turn_at: None,
            delay_started: 0.0,
            clock: 0.0,
        })
    }

    /// Signed degrees the given input asks to snap. Zero when the matching
    /// direction is disabled or the stick points North.
    fn turn_amount(&self, input: Vec2) -> f32 {
        if approx_zero_vec2(input) {
            return 0.0;
        }
        match nearest_cardinal(input) {
            Cardinal::North => 0.0,
            Cardinal::South if self.config.enable_turn_around => 180.0,
            Cardinal::East if self.config.enable_turn_left_right => self.config.turn_amount,
            Cardinal::West if self.config.enable_turn_left_right => -self.config.turn_amount,
            _ => 0.0,
        }
    }

    /// Whether the debounce timer is still suppressing new snaps.
    pub fn is_debouncing(&self) -> bool {
        self.last_turn_at.is_some()
    }
}

impl LocomotionProvider for SnapTurnProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn phase(&self) -> LocomotionPhase {
        self.phase
    }

    fn tick(&mut self, dt: f32, arbiter: &mut LocomotionArbiter, rig: Option<&mut XrRig>) {
        self.clock += dt;

        // Done is observable for exactly one tick; clear it at the top so
        // comfort systems watching for Done saw it last tick.
        if self.phase == LocomotionPhase::Done {
            self.phase = LocomotionPhase::Idle;
        }

        if let Some(stamp) = self.last_turn_at
            && self.clock >= stamp + self.config.debounce_time
        {
            self.last_turn_at = None;
        }

        // Rig unavailable: timers keep running but no move is attempted.
        let Some(rig) = rig else {
            return;
        };

        let input = self.input.read();
        let amount = self.turn_amount(input);

        match self.phase {
            LocomotionPhase::Idle => {
                if !approx_zero(amount) && self.last_turn_at.is_none() && !arbiter.is_busy() {
                    self.phase = LocomotionPhase::Started;
                    self.delay_started = self.clock;
                    self.pending_amount = amount;
                    tracing::debug!(amount, "snap turn armed");
                }
            }
            LocomotionPhase::Started => {
                if !approx_zero(amount) {
                    self.pending_amount = amount;
                }
                if self.clock - self.delay_started >= self.config.delay_time {
                    self.phase = LocomotionPhase::Moving;
                }
            }
            LocomotionPhase::Moving | LocomotionPhase::Done => {}
        }

        if self.phase == LocomotionPhase::Moving {
            if approx_zero(self.pending_amount) {
                self.phase = LocomotionPhase::Done;
            } else {
                match arbiter.request_exclusive_operation(self.id) {
                    RequestResult::Success => {
                        rig.rotate_around_camera_using_origin_up(self.pending_amount);
                        tracing::debug!(degrees = self.pending_amount, "snap turn applied");
                        self.pending_amount = 0.0;
                        self.last_turn_at = Some(self.clock);
                        if arbiter.finish_exclusive_operation(self.id) != RequestResult::Success {
                            tracing::warn!("release after snap was refused");
                        }
                    }
                    RequestResult::Busy => {
                        // Keep the latched amount and retry next tick.
                        tracing::trace!("arbiter busy; snap deferred");
                    }
                    RequestResult::Error => {
                        tracing::warn!("snap request rejected by arbiter");
                    }
                }
            }
        }
    }
}
