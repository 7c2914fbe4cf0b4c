use rigstride_common::ProviderId;
use serde::{Deserialize, Serialize};

/// Synchronous outcome of an arbiter request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestResult {
    /// The request was granted.
    Success,
    /// Another provider moved the rig this tick; retry next tick.
    Busy,
    /// Contract violation: nil provider, re-entrant acquire, or a release
    /// attempted by a non-holder.
    Error,
}

/// Serializes rig mutation across competing locomotion providers.
///
/// One arbiter exists per rig and is handed to every provider tick. At most
/// one provider holds the exclusive lock at any instant, and at most one
/// exclusive operation is granted per tick, so a provider that loses the
/// race observes `Busy` even after the winner has already released.
///
/// The per-tick sweep in [`tick`](Self::tick) must run before any provider
/// acts so that a freshly expired stale lock is reacquirable the same tick.
pub struct LocomotionArbiter {
    holder: Option<ProviderId>,
    time_made_exclusive: f32,
    granted_this_tick: bool,
    clock: f32,
    operation_timeout: f32,
}

/// Default stale-lock timeout in time-units.
pub const DEFAULT_OPERATION_TIMEOUT: f32 = 10.0;

impl Default for LocomotionArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl LocomotionArbiter {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_OPERATION_TIMEOUT)
    }

    pub fn with_timeout(operation_timeout: f32) -> Self {
        Self {
            holder: None,
            time_made_exclusive: 0.0,
            granted_this_tick: false,
            clock: 0.0,
            operation_timeout,
        }
    }

    pub fn operation_timeout(&self) -> f32 {
        self.operation_timeout
    }

    /// Whether some provider currently holds the exclusive lock.
    pub fn is_busy(&self) -> bool {
        self.holder.is_some()
    }

    /// Elapsed arbiter time in time-units.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Advance the arbiter clock and run the stale-lock sweep.
    ///
    /// Call once per simulation tick, before any provider acts.
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt;
        self.granted_this_tick = false;
        if let Some(holder) = self.holder
            && self.clock > self.time_made_exclusive + self.operation_timeout
        {
            tracing::debug!(?holder, "force-releasing stale exclusive lock");
            self.reset_exclusivity();
        }
    }

    /// Request exclusive rights to move the rig for the rest of this tick.
    pub fn request_exclusive_operation(&mut self, provider: ProviderId) -> RequestResult {
        if provider.is_nil() {
            tracing::warn!("exclusive operation requested with nil provider id");
            return RequestResult::Error;
        }

        match self.holder {
            None if !self.granted_this_tick => {
                self.holder = Some(provider);
                self.time_made_exclusive = self.clock;
                self.granted_this_tick = true;
                tracing::debug!(?provider, "exclusive operation granted");
                RequestResult::Success
            }
            // An operation already ran this tick; the lock is free again but
            // the rig has been moved. Losers retry next tick.
            None => RequestResult::Busy,
            Some(holder) if holder == provider => {
                tracing::warn!(?provider, "re-entrant exclusive acquire");
                RequestResult::Error
            }
            Some(_) => RequestResult::Busy,
        }
    }

    /// Release the exclusive lock. Only the current holder may release.
    pub fn finish_exclusive_operation(&mut self, provider: ProviderId) -> RequestResult {
        if provider.is_nil() || self.holder.is_none() {
            return RequestResult::Error;
        }

        if self.holder == Some(provider) {
            self.reset_exclusivity();
            tracing::debug!(?provider, "exclusive operation finished");
            RequestResult::Success
        } else {
            tracing::warn!(?provider, "release attempted by non-holder");
            RequestResult::Error
        }
    }

    fn reset_exclusivity(&mut self) {
        self.holder = None;
        self.time_made_exclusive = 0.0;
    }
}
