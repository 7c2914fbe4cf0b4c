use glam::Vec2;

/// A per-tick 2D input sample in [-1, 1] on both axes.
///
/// Each locomotion provider owns one source and polls it once per tick.
/// Binding resolution (which stick, which hand) happens behind this trait.
pub trait InputSource {
    fn read(&mut self) -> Vec2;
}

/// Source that always returns the same vector. Useful for held-stick demos.
#[derive(Debug, Clone, Copy)]
pub struct ConstantInput(pub Vec2);

impl InputSource for ConstantInput {
    fn read(&mut self) -> Vec2 {
        self.0
    }
}

/// Source that replays a fixed per-tick sequence, then zero.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    samples: Vec<Vec2>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(samples: Vec<Vec2>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Remaining samples before the source goes quiet.
    pub fn remaining(&self) -> usize {
        self.samples.len().saturating_sub(self.cursor)
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self) -> Vec2 {
        let sample = self.samples.get(self.cursor).copied().unwrap_or(Vec2::ZERO);
        self.cursor += 1;
        sample
    }
}

/// Combines two hand sources by vector sum, clamped per component to [-1, 1].
pub struct PairedInput {
    left: Box<dyn InputSource>,
    right: Box<dyn InputSource>,
}

impl PairedInput {
    pub fn new(left: Box<dyn InputSource>, right: Box<dyn InputSource>) -> Self {
        Self { left, right }
    }
}

impl InputSource for PairedInput {
    fn read(&mut self) -> Vec2 {
        let sum = self.left.read() + self.right.read();
        let clamped = sum.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        if sum != clamped {
            tracing::trace!(?sum, "paired input clamped to unit square");
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_repeats() {
        let mut src = ConstantInput(Vec2::new(0.5, -0.5));
        assert_eq!(src.read(), Vec2::new(0.5, -0.5));
        assert_eq!(src.read(), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn scripted_replays_then_goes_quiet() {
        let mut src = ScriptedInput::new(vec![Vec2::X, Vec2::Y]);
        assert_eq!(src.read(), Vec2::X);
        assert_eq!(src.remaining(), 1);
        assert_eq!(src.read(), Vec2::Y);
        assert_eq!(src.read(), Vec2::ZERO);
        assert_eq!(src.read(), Vec2::ZERO);
    }

    #[test]
    fn paired_sums_hands() {
        let mut src = PairedInput::new(
            Box::new(ConstantInput(Vec2::new(0.3, 0.2))),
            Box::new(ConstantInput(Vec2::new(0.4, -0.1))),
        );
        let v = src.read();
        assert!((v - Vec2::new(0.7, 0.1)).length() < 1e-6);
    }

    #[test]
    fn paired_clamps_to_unit_square() {
        let mut src = PairedInput::new(
            Box::new(ConstantInput(Vec2::new(0.8, -0.9))),
            Box::new(ConstantInput(Vec2::new(0.8, -0.9))),
        );
        assert_eq!(src.read(), Vec2::new(1.0, -1.0));
    }
}
