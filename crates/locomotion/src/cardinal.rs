use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of four input-direction buckets derived from a 2D vector's angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

/// Classify a stick vector into its nearest cardinal direction.
///
/// Equivalent to bucketing `atan2(y, x)` in degrees: an absolute angle
/// under 45 is East, over 135 is West, everything else is North or South by
/// the sign of the angle. The component comparisons below encode the same
/// rule without trigonometry, so the 45 and 135 degree boundaries classify
/// exactly (both fall to North/South).
pub fn nearest_cardinal(value: Vec2) -> Cardinal {
    if value.x > 0.0 && value.y.abs() < value.x {
        Cardinal::East
    } else if value.x < 0.0 && value.y.abs() < -value.x {
        Cardinal::West
    } else if value.y >= 0.0 {
        Cardinal::North
    } else {
        Cardinal::South
    }
}
