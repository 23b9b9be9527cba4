// lexiclean-core/src/dictionary/source.rs
//! Where dictionary resources come from.
//!
//! A source only answers "give me the raw text of resource X"; parsing and
//! validation belong to the store. Absence is reported as `Ok(None)` so the
//! store can raise `ResourceNotFound` with the variant that asked for it.

use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dictionary::RecordFormat;
use crate::errors::LoadError;

/// Raw content of a dictionary resource plus how to parse it.
#[derive(Debug, Clone)]
pub struct RawResource {
    pub content: String,
    pub format: RecordFormat,
}

/// A provider of dictionary resources, looked up by base name.
pub trait DictionarySource: Send + Sync + fmt::Debug {
    /// Returns the resource named `resource`, or `None` if this source lacks it.
    fn fetch(&self, resource: &str) -> Result<Option<RawResource>, LoadError>;

    /// Human-readable description used in logs.
    fn describe(&self) -> String;
}

/// The dictionaries compiled into the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl DictionarySource for EmbeddedSource {
    fn fetch(&self, resource: &str) -> Result<Option<RawResource>, LoadError> {
        let content = match resource {
            "word_replacements" => include_str!("../../config/word_replacements.json"),
            "word_replacements_buzzwords" => {
                include_str!("../../config/word_replacements_buzzwords.json")
            }
            _ => return Ok(None),
        };
        Ok(Some(RawResource {
            content: content.to_string(),
            format: RecordFormat::Json,
        }))
    }

    fn describe(&self) -> String {
        "embedded dictionaries".to_string()
    }
}

/// Reads `<root>/<resource>.json`, `.yaml` or `.yml`, first match wins.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl DictionarySource for DirectorySource {
    fn fetch(&self, resource: &str) -> Result<Option<RawResource>, LoadError> {
        let candidates = [
            ("json", RecordFormat::Json),
            ("yaml", RecordFormat::Yaml),
            ("yml", RecordFormat::Yaml),
        ];

        for (extension, format) in candidates {
            let path = self.root.join(format!("{}.{}", resource, extension));
            match fs::read_to_string(&path) {
                Ok(content) => {
                    debug!("Read dictionary resource from {}", path.display());
                    return Ok(Some(RawResource { content, format }));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(LoadError::Io {
                        resource: path.display().to_string(),
                        source: e,
                    })
                }
            }
        }

        debug!("No file for resource '{}' under {}", resource, self.root.display());
        Ok(None)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// Resources held in memory, keyed by base name. Always JSON.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, resource: &str, json: impl Into<String>) -> Self {
        self.resources.insert(resource.to_string(), json.into());
        self
    }
}

impl DictionarySource for MemorySource {
    fn fetch(&self, resource: &str) -> Result<Option<RawResource>, LoadError> {
        Ok(self.resources.get(resource).map(|content| RawResource {
            content: content.clone(),
            format: RecordFormat::Json,
        }))
    }

    fn describe(&self) -> String {
        format!("in-memory source ({} resources)", self.resources.len())
    }
}
