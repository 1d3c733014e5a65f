// src/model/sequence.rs

/// Multiplier of the linear congruential step.
pub const MULTIPLIER: u32 = 17;
/// Increment of the linear congruential step.
pub const INCREMENT: u32 = 43;
/// Every value the source produces lies in `[0, MODULUS)`.
pub const MODULUS: u32 = 100;

/// A tiny deterministic number source standing in for a real RNG.
///
/// Each call to [`SequenceSource::next_value`] computes
/// `state = (state * 17 + 43) mod 100` and hands back the new state, so two
/// sources seeded alike produce the same infinite sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceSource {
    state: u32,
}

impl SequenceSource {
    /// Any integer is a legal seed. Values outside `[0, 100)` are reduced with
    /// the Euclidean remainder, which leaves the produced sequence unchanged.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(i64::from(MODULUS)) as u32,
        }
    }

    /// Advances the source one step and returns the new state.
    pub fn next_value(&mut self) -> u32 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state
    }

    /// Current state without advancing.
    pub fn state(&self) -> u32 {
        self.state
    }
}
