//! Deterministic seed generator for grid initialization.
//!
//! The recurrence is the classic `rand()` LCG truncated to 31 bits. It is kept
//! byte-for-byte stable so a seed always produces the same starting grid.

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;
const MASK: u32 = 0x7fff_ffff;

/// Linear-congruential generator: `state = (state * 1103515245 + 12345) & 0x7fffffff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the recurrence once and returns the new 31-bit state.
    #[inline]
    pub fn next_u31(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        self.state
    }

    /// Advances once and reports whether the draw falls under `percent` out of 100.
    #[inline]
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_u31() % 100 < percent
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u31())
    }
}
