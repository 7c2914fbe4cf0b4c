use serde::{Deserialize, Serialize};

/// Where a provider is in its locomotion lifecycle.
///
/// Recomputed every tick from that tick's outcome; never carried stale.
/// `Done` is observable for exactly one tick before returning to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocomotionPhase {
    /// No locomotion in progress.
    #[default]
    Idle,
    /// Locomotion is armed but has not moved the rig yet (snap-turn delay).
    Started,
    /// The rig was moved this tick.
    Moving,
    /// Locomotion ended this tick; lasts one tick.
    Done,
}

impl LocomotionPhase {
    /// Phase step for continuous providers, driven by whether the rig was
    /// actually moved this tick.
    #[must_use]
    pub fn advance_continuous(self, moved: bool) -> Self {
        match self {
            Self::Idle | Self::Started => {
                if moved {
                    Self::Moving
                } else {
                    self
                }
            }
            Self::Moving => {
                if moved {
                    Self::Moving
                } else {
                    Self::Done
                }
            }
            Self::Done => {
                if moved {
                    Self::Moving
                } else {
                    Self::Idle
                }
            }
        }
    }

    /// Whether locomotion is underway (armed or moving).
    pub fn is_active(self) -> bool {
        matches!(self, Self::Started | Self::Moving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LocomotionPhase::*;

    #[test]
    fn starts_idle() {
        assert_eq!(LocomotionPhase::default(), Idle);
    }

    #[test]
    fn idle_moves_to_moving_on_motion() {
        assert_eq!(Idle.advance_continuous(true), Moving);
        assert_eq!(Idle.advance_continuous(false), Idle);
    }

    #[test]
    fn moving_drains_through_done_to_idle() {
        assert_eq!(Moving.advance_continuous(false), Done);
        assert_eq!(Done.advance_continuous(false), Idle);
    }

    #[test]
    fn done_lasts_exactly_one_tick() {
        let mut phase = Moving;
        phase = phase.advance_continuous(false);
        assert_eq!(phase, Done);
        phase = phase.advance_continuous(false);
        assert_eq!(phase, Idle);
    }

    #[test]
    fn done_can_resume_moving() {
        assert_eq!(Done.advance_continuous(true), Moving);
    }

    #[test]
    fn active_states() {
        assert!(Started.is_active());
        assert!(Moving.is_active());
        assert!(!Idle.is_active());
        assert!(!Done.is_active());
    }
}
