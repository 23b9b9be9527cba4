#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod syllables;
pub mod readability;
pub mod structure;

/// Common type definitions
pub type ReadabilityScore = f64;
