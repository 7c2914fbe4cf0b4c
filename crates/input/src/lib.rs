//! Input sampling strategies for locomotion providers.
//!
//! Providers never resolve device bindings; they read a per-tick 2D vector
//! from an [`InputSource`] supplied at construction.
//!
//! # Invariants
//! - Sampled vectors stay within [-1, 1] on both axes.
//! - Sources are polled exactly once per provider tick.

pub mod source;

pub use source::{ConstantInput, InputSource, PairedInput, ScriptedInput};

pub fn crate_info() -> &'static str {
    "rigstride-input v0.1.0"
}
