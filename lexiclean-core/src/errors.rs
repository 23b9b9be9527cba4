//! errors.rs - Custom error types for the lexiclean-core library.
//!
//! Loading a dictionary and processing text fail in different ways, so each
//! has its own enum. Neither is retried internally; the caller decides.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Failures raised while loading a dictionary variant.
///
/// Whatever the variant, the store is left not-ready afterwards.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    #[error("Dictionary resource '{resource}' for variant '{variant}' not found")]
    ResourceNotFound { variant: String, resource: String },

    #[error("Dictionary resource '{0}' contains no valid entries")]
    EmptyDictionary(String),

    #[error("Dictionary resource '{resource}' is malformed: {reason}")]
    MalformedData { resource: String, reason: String },

    #[error("An unexpected I/O error occurred while reading '{resource}': {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn malformed(resource: &str, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            resource: resource.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failures raised by a processing call. No statistics survive a failure.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProcessError {
    #[error("The dictionary must be loaded before processing text")]
    NotInitialized,

    #[error("Text processing failed: {0}")]
    ProcessingFailure(#[from] anyhow::Error),
}
