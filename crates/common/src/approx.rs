use glam::{Vec2, Vec3};

/// Threshold below which a delta is treated as no motion at all.
///
/// Deltas under this magnitude never acquire the exclusive lock.
pub const EPSILON: f32 = 1e-6;

/// True when `v` is within [`EPSILON`] of zero.
pub fn approx_zero(v: f32) -> bool {
    v.abs() < EPSILON
}

/// True when `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// True when every component of `v` is within [`EPSILON`] of zero.
pub fn approx_zero_vec2(v: Vec2) -> bool {
    v.abs().max_element() < EPSILON
}

/// True when every component of `v` is within [`EPSILON`] of zero.
pub fn approx_zero_vec3(v: Vec3) -> bool {
    v.abs().max_element() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_approx_zero() {
        assert!(approx_zero(0.0));
        assert!(approx_zero(1e-7));
        assert!(!approx_zero(1e-3));
    }

    #[test]
    fn eq_within_epsilon() {
        assert!(approx_eq(1.0, 1.0));
        assert!(!approx_eq(1.0, 1.001));
    }

    #[test]
    fn vector_zero_checks() {
        assert!(approx_zero_vec2(Vec2::ZERO));
        assert!(!approx_zero_vec2(Vec2::new(0.0, 0.01)));
        assert!(approx_zero_vec3(Vec3::splat(1e-8)));
        assert!(!approx_zero_vec3(Vec3::new(0.0, 0.01, 0.0)));
    }
}
