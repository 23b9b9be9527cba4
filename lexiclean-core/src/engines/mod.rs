// lexiclean-core/src/engines/mod.rs
//! Concrete implementations of the `SanitizationEngine` trait.
//!
//! Each engine lives in its own file and is declared here with `pub mod`.
//!
//! # License
//! MIT OR Apache-2.0

pub mod replacement_engine;
