//! Locomotion core: exclusivity arbitration and phase tracking for rig
//! movement providers.
//!
//! Each simulation tick the host advances the arbiter first, then every
//! provider. Providers sample input, compute a candidate transform delta,
//! and apply it to the rig only while holding the arbiter's exclusive lock.
//!
//! # Invariants
//! - At most one provider holds the lock at any instant, and at most one
//!   exclusive operation runs per tick.
//! - A provider's phase reflects the current tick's outcome only.
//! - Negligible deltas never acquire the lock.
//! - A lock held past the operation timeout is force-released by the
//!   arbiter's pre-provider sweep.

pub mod arbiter;
pub mod cardinal;
pub mod continuous_move;
pub mod continuous_turn;
pub mod phase;
pub mod provider;
pub mod snap_turn;

pub use arbiter::{DEFAULT_OPERATION_TIMEOUT, LocomotionArbiter, RequestResult};
pub use cardinal::{Cardinal, nearest_cardinal};
pub use continuous_move::{ContinuousMoveConfig, ContinuousMoveProvider, GravityApplicationMode};
pub use continuous_turn::{ContinuousTurnConfig, ContinuousTurnProvider};
pub use phase::LocomotionPhase;
pub use provider::{ConfigError, LocomotionProvider};
pub use snap_turn::{SnapTurnConfig, SnapTurnProvider};

pub fn crate_info() -> &'static str {
    "rigstride-locomotion v0.1.0"
}
