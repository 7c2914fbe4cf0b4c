use rigstride_common::ProviderId;
use rigstride_rig::XrRig;

use crate::arbiter::LocomotionArbiter;
use crate::phase::LocomotionPhase;

/// Invalid provider configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

/// A locomotion provider: one movement strategy competing for the rig.
///
/// The host loop calls [`tick`](Self::tick) once per simulation tick, after
/// the arbiter's own tick. Providers sample their input source, compute a
/// candidate delta, and apply it only while holding the arbiter's exclusive
/// lock. When the rig is unavailable the tick is a no-op ("no move
/// attempted").
pub trait LocomotionProvider {
    /// Identity this provider presents to the arbiter.
    fn id(&self) -> ProviderId;

    /// Phase reflecting this tick's outcome.
    fn phase(&self) -> LocomotionPhase;

    /// Run one simulation tick of `dt` time-units.
    fn tick(&mut self, dt: f32, arbiter: &mut LocomotionArbiter, rig: Option<&mut XrRig>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_are_rejected() {
        assert!(ensure_non_negative("speed", 0.0).is_ok());
        assert!(ensure_non_negative("speed", 1.5).is_ok());
        let err = ensure_non_negative("speed", -1.0).unwrap_err();
        assert!(err.to_string().contains("speed"));
    }
}
