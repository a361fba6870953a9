//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use fourw_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` from `next_u32_range`. A
/// Fisher–Yates pass driven by it always swaps with index 0, which gives a
/// fixed, known permutation.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence, clamped into
/// the requested range. Falls back to `max` once the sequence is exhausted,
/// so a shuffle driven past the script leaves the remaining order untouched.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let val = self.values.get(self.index).copied().unwrap_or(max);
        self.index += 1;
        val.clamp(min, max)
    }
}
