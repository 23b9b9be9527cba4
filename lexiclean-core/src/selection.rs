// lexiclean-core/src/selection.rs
//! Randomness used to choose among replacement options.
//!
//! The engine takes a [`ReplacementPicker`] at construction instead of reaching
//! for a global generator, so tests and `--seed` runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Chooses an index in `0..len`. `len` is always at least 1.
pub trait ReplacementPicker: Send + Sync + fmt::Debug {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl ReplacementPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Uniform choice from a seeded generator; the same seed replays the same picks.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReplacementPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..len)
    }
}

/// Always the first option.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstOptionPicker;

impl ReplacementPicker for FirstOptionPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}
