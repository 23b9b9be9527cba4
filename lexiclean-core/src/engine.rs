// lexiclean-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! The trait is the surface external collaborators (CLIs, servers, UIs) talk
//! to: load a dictionary variant, check readiness, and process text into a
//! sanitized copy plus [`TextStatistics`].
//!
//! License: MIT OR APACHE 2.0

use crate::errors::{LoadError, ProcessError};
use crate::statistics::TextStatistics;

/// Receives the fraction of words processed (0.0 to 1.0) once per word.
///
/// Invoked synchronously from the scan loop, so it must be cheap. Returning an
/// error aborts the call with [`ProcessError::ProcessingFailure`].
pub type ProgressCallback<'a> = &'a mut dyn FnMut(f64) -> anyhow::Result<()>;

/// An owned progress callback that can be moved onto another thread.
pub type DetachedProgress = Box<dyn FnMut(f64) -> anyhow::Result<()> + Send>;

/// A dictionary-driven text sanitizer.
///
/// Implementations are meant to be long-lived and shared between threads.
pub trait SanitizationEngine: Send + Sync {
    /// Loads a named dictionary variant, replacing the active one.
    ///
    /// Must not run concurrently with itself; implementations serialize it.
    fn load(&self, variant: &str) -> Result<(), LoadError>;

    /// Whether a dictionary is loaded and `process` may be called.
    fn is_ready(&self) -> bool;

    /// Name of the currently active dictionary variant.
    fn active_variant(&self) -> String;

    /// Replaces flagged words in `text` and measures it in one left-to-right pass.
    ///
    /// # Arguments
    /// * `text` - The input to sanitize.
    /// * `on_progress` - Optional progress callback, see [`ProgressCallback`].
    ///
    /// Fails with [`ProcessError::NotInitialized`] before a successful load.
    fn process(
        &self,
        text: &str,
        on_progress: Option<ProgressCallback<'_>>,
    ) -> Result<(String, TextStatistics), ProcessError>;
}
