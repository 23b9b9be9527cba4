// lexiclean-core/src/dictionary/store.rs
//! The shared dictionary store.
//!
//! Loaded entries live in an immutable [`DictionarySnapshot`] behind an `Arc`.
//! A load clears the current snapshot, builds a new one off to the side and
//! swaps it in only once it is complete, so readers holding the previous `Arc`
//! keep a consistent view and nobody ever sees a half-built map. Loads are
//! serialized by their own mutex.
//!
//! License: MIT OR Apache-2.0

use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dictionary::source::{DictionarySource, EmbeddedSource};
use crate::dictionary::{parse_records, DictionaryEntry, DictionaryRecord, DictionaryVariant};
use crate::errors::LoadError;
use crate::masking::loggable_word;

/// Lower-cases a word for use as a dictionary key.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// An immutable, fully built word map for one dictionary variant.
#[derive(Debug, Default)]
pub struct DictionarySnapshot {
    variant: DictionaryVariant,
    entries: HashMap<String, DictionaryEntry>,
}

impl DictionarySnapshot {
    /// Builds a snapshot from parsed records.
    ///
    /// Blank words and duplicate normalized keys are logged and skipped; a
    /// record without replacement options fails the whole build.
    pub fn from_records(
        variant: DictionaryVariant,
        resource: &str,
        records: Vec<DictionaryRecord>,
    ) -> Result<Self, LoadError> {
        let mut entries = HashMap::with_capacity(records.len());

        for record in records {
            if record.original_word.trim().is_empty() {
                warn!("Skipping a record with an empty word in '{}'.", resource);
                continue;
            }

            let entry = record.into_entry(resource)?;
            let key = normalize_word(&entry.original_word);
            if entries.contains_key(&key) {
                warn!(
                    "Failed to add word '{}' from '{}': duplicate entry.",
                    loggable_word(&entry.original_word),
                    resource
                );
                continue;
            }
            entries.insert(key, entry);
        }

        if entries.is_empty() {
            return Err(LoadError::EmptyDictionary(resource.to_string()));
        }

        Ok(Self { variant, entries })
    }

    /// Case-insensitive exact lookup.
    ///
    /// Keys are stored lower-cased, so an exact hit needs no allocation; any
    /// other word is retried in normalized form if normalizing changes it.
    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        if let Some(entry) = self.entries.get(word) {
            return Some(entry);
        }
        let normalized = normalize_word(word);
        if normalized == word {
            None
        } else {
            self.entries.get(&normalized)
        }
    }

    pub fn variant(&self) -> DictionaryVariant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Long-lived, shareable holder of the active dictionary.
#[derive(Debug)]
pub struct DictionaryStore {
    source: Box<dyn DictionarySource>,
    current: RwLock<Option<Arc<DictionarySnapshot>>>,
    active_variant: RwLock<DictionaryVariant>,
    load_lock: Mutex<()>,
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::embedded()
    }
}

impl DictionaryStore {
    pub fn new<S: DictionarySource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            current: RwLock::new(None),
            active_variant: RwLock::new(DictionaryVariant::Default),
            load_lock: Mutex::new(()),
        }
    }

    /// A store backed by the dictionaries compiled into the library.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    fn read_current(&self) -> RwLockReadGuard<'_, Option<Arc<DictionarySnapshot>>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_current(&self) -> RwLockWriteGuard<'_, Option<Arc<DictionarySnapshot>>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads a dictionary variant, replacing whatever was loaded before.
    ///
    /// The store is not-ready from the moment this is called until it returns
    /// `Ok`. On error it stays not-ready and the active variant is unchanged.
    pub fn load(&self, variant_name: &str) -> Result<(), LoadError> {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let variant = DictionaryVariant::from_name(variant_name);

        info!(
            "Initializing dictionary of type '{}' (resolved to '{}') from {}",
            variant_name,
            variant,
            self.source.describe()
        );
        *self.write_current() = None;

        match self.build_snapshot(variant_name, variant) {
            Ok(snapshot) => {
                let count = snapshot.len();
                *self.write_current() = Some(Arc::new(snapshot));
                *self
                    .active_variant
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = variant;
                info!("Dictionary '{}' initialized with {} words", variant, count);
                Ok(())
            }
            Err(e) => {
                error!("Failed to initialize dictionary of type '{}': {}", variant_name, e);
                Err(e)
            }
        }
    }

    fn build_snapshot(
        &self,
        variant_name: &str,
        variant: DictionaryVariant,
    ) -> Result<DictionarySnapshot, LoadError> {
        let resource = variant.resource_name();
        debug!("Attempting to load resource: {}", resource);

        let raw = self
            .source
            .fetch(resource)?
            .ok_or_else(|| LoadError::ResourceNotFound {
                variant: variant_name.to_string(),
                resource: resource.to_string(),
            })?;

        let records = parse_records(resource, &raw.content, raw.format)?;
        debug!("Parsed {} records from '{}'", records.len(), resource);

        DictionarySnapshot::from_records(variant, resource, records)
    }

    /// The current snapshot, if a load has succeeded.
    ///
    /// Holding the returned `Arc` keeps that dictionary alive and unchanged
    /// even if a reload happens meanwhile.
    pub fn snapshot(&self) -> Option<Arc<DictionarySnapshot>> {
        self.read_current().clone()
    }

    pub fn lookup(&self, word: &str) -> Option<DictionaryEntry> {
        self.snapshot()?.lookup(word).cloned()
    }

    pub fn is_ready(&self) -> bool {
        self.read_current().is_some()
    }

    /// Name of the last successfully loaded variant (`"default"` before any load).
    pub fn active_variant(&self) -> String {
        self.active_variant
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_str()
            .to_string()
    }

    /// Number of entries in the current dictionary, 0 when not ready.
    pub fn len(&self) -> usize {
        self.snapshot().map_or(0, |s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
