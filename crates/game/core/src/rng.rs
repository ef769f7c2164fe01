//! Random sources for stat rolling and skill probability checks.
//!
//! Every probabilistic decision in a duel draws a unit sample `u` in `[0, 1)`
//! from a [`RandomSource`]. Skills compare that sample against their chance;
//! stat rolling maps it onto a range with [`RandomSource::range`].
//!
//! Three sources are provided:
//!
//! - [`ThreadRandom`]: the thread-local generator, for ordinary play
//! - [`SeededRandom`]: a seeded `StdRng`, for reproducible duels
//! - [`ScriptedRandom`]: a fixed cycle of samples, for tests and replays

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform unit samples.
pub trait RandomSource {
    /// Returns a sample uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns `min + (max - min) * u` for a fresh unit sample `u`.
    ///
    /// `u = 0` yields exactly `min`; `max` is approached but never produced.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        let u = self.next_unit();
        (max - min) * u + min
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Thread-local generator seeded by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic generator: the same seed always replays the same duel.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    inner: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source that yields `samples` in order, forever.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        let samples = samples.into();
        assert!(
            !samples.is_empty(),
            "ScriptedRandom needs at least one sample"
        );
        Self { samples, cursor: 0 }
    }

    /// Creates a source that always yields `sample`.
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}

/// Returns a value in `[min, max)` drawn from the thread generator.
pub fn range(min: f64, max: f64) -> f64 {
    ThreadRandom.range(min, max)
}
