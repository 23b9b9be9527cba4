// lexiclean-core/src/lib.rs
//! # Lexiclean Core Library
//!
//! `lexiclean-core` provides the platform-independent logic for dictionary-driven
//! word replacement. It loads a word→alternatives dictionary, replaces flagged
//! words in a single left-to-right pass, and measures the text while doing so:
//! word, sentence and paragraph counts, per-segment replacement density,
//! reading time and a Flesch reading-ease score.
//!
//! The library does no I/O beyond reading dictionary and configuration files,
//! and keeps no per-call state: every `process` call returns its own
//! [`TextStatistics`].
//!
//! ## Modules
//!
//! * `config`: `EngineConfig` (dictionary location and variant, highlight tags, seed).
//! * `dictionary`: dictionary records, variants, sources and the shared `DictionaryStore`.
//! * `engine`: the `SanitizationEngine` trait.
//! * `engines`: concrete engines, currently `ReplacementEngine`.
//! * `statistics`: `TextStatistics` and `SegmentPoint`.
//! * `markup`: replacement pieces and the tags they are rendered with.
//! * `selection`: injectable randomness for choosing replacements.
//! * `masking`: keeps flagged words out of debug logs.
//! * `headless`: one-shot convenience wrapper.
//! * `errors`: `LoadError` and `ProcessError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lexiclean_core::{DictionaryStore, HighlightMarkup, ReplacementEngine, SanitizationEngine, SeededPicker};
//!
//! fn main() -> anyhow::Result<()> {
//!     // 1. A store over the embedded dictionaries, shared with the engine.
//!     let store = Arc::new(DictionaryStore::embedded());
//!
//!     // 2. Deterministic selection and bare replacement words.
//!     let engine = ReplacementEngine::new(store)
//!         .with_picker(SeededPicker::new(42))
//!         .with_markup(HighlightMarkup::none());
//!
//!     // 3. Load a variant, then process.
//!     engine.load("default")?;
//!     let (text, stats) = engine.process("What a damn mess.", None)?;
//!
//!     assert!(!text.contains("damn"));
//!     assert_eq!(stats.replaced_words_count, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Dictionary loading fails with [`LoadError`], processing with [`ProcessError`].
//! Configuration helpers return `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod markup;
pub mod masking;
pub mod selection;
pub mod statistics;

/// Re-exports the configuration types.
pub use config::{config_candidate_paths, DictionaryConfig, EngineConfig};

/// Re-exports the error types.
pub use errors::{LoadError, ProcessError};

/// Re-exports the dictionary model and store.
pub use dictionary::source::{DictionarySource, DirectorySource, EmbeddedSource, MemorySource};
pub use dictionary::store::{DictionarySnapshot, DictionaryStore};
pub use dictionary::{DictionaryEntry, DictionaryVariant, PartOfSpeech, WordCategory};

/// Re-exports the engine trait and its implementation.
pub use engine::{DetachedProgress, ProgressCallback, SanitizationEngine};
pub use engines::replacement_engine::ReplacementEngine;

/// Re-exports statistics, markup and selection types.
pub use markup::{resolve_markers, HighlightMarkup, MarkedText, Piece};
pub use selection::{FirstOptionPicker, ReplacementPicker, SeededPicker, ThreadRngPicker};
pub use statistics::{SegmentPoint, TextStatistics};

/// Re-exports the one-shot helper.
pub use headless::headless_sanitize_string;
