//! Shared types for the rigstride locomotion toolkit.
//!
//! # Invariants
//! - `ProviderId` is the only identity providers present to the arbiter.
//! - `Transform` direction helpers agree on the +Z forward, +Y up convention.

pub mod approx;
pub mod types;

pub use approx::{EPSILON, approx_eq, approx_zero, approx_zero_vec2, approx_zero_vec3};
pub use types::{ProviderId, Transform};

pub fn crate_info() -> &'static str {
    "rigstride-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
