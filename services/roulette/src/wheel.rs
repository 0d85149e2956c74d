//! Wheel and random source
//!
//! The wheel owns the pocket count and the last result. Randomness is
//! injected through `RandomSource` so tests can script outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{AMERICAN_POCKETS, EUROPEAN_POCKETS};
use crate::errors::{Result, RouletteError};

/// Abstraction over the draw behind a spin.
pub trait RandomSource: Send {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// `RandomSource` backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence of draws
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0.gen_range(0..bound)
    }
}

/// Replays a scripted list of outcomes, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    outcomes: Vec<u32>,
    position: usize,
}

impl FixedSequence {
    pub fn new(outcomes: impl Into<Vec<u32>>) -> Self {
        Self {
            outcomes: outcomes.into(),
            position: 0,
        }
    }

    /// Always lands on `number`
    pub fn always(number: u32) -> Self {
        Self::new(vec![number])
    }
}

impl RandomSource for FixedSequence {
    fn next_below(&mut self, bound: u32) -> u32 {
        if self.outcomes.is_empty() {
            return 0;
        }
        let outcome = self.outcomes[self.position % self.outcomes.len()];
        self.position = self.position.wrapping_add(1);
        outcome % bound
    }
}

pub struct Wheel {
    pocket_count: u32,
    current_number: Option<u32>,
    source: Box<dyn RandomSource>,
}

impl Wheel {
    pub fn new(pocket_count: u32, source: Box<dyn RandomSource>) -> Result<Self> {
        if pocket_count == 0 {
            return Err(RouletteError::InvalidPocketCount(pocket_count));
        }
        Ok(Self {
            pocket_count,
            current_number: None,
            source,
        })
    }

    /// 37 pockets, entropy-seeded
    pub fn european() -> Self {
        Self::with_layout(EUROPEAN_POCKETS)
    }

    /// 38 pockets, entropy-seeded. Pocket 37 stands for 00.
    pub fn american() -> Self {
        Self::with_layout(AMERICAN_POCKETS)
    }

    fn with_layout(pocket_count: u32) -> Self {
        Self {
            pocket_count,
            current_number: None,
            source: Box::new(RngSource::from_entropy()),
        }
    }

    pub fn pocket_count(&self) -> u32 {
        self.pocket_count
    }

    /// Last result, `None` until the first spin.
    pub fn current_number(&self) -> Option<u32> {
        self.current_number
    }

    pub fn spin(&mut self) -> u32 {
        // Sources are trusted for uniformity, not for range.
        let number = self.source.next_below(self.pocket_count) % self.pocket_count;
        self.current_number = Some(number);
        number
    }
}

impl std::fmt::Debug for Wheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wheel")
            .field("pocket_count", &self.pocket_count)
            .field("current_number", &self.current_number)
            .finish_non_exhaustive()
    }
}
