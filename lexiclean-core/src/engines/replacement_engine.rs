// lexiclean-core/src/engines/replacement_engine.rs
//! A `SanitizationEngine` that replaces dictionary words with one of their
//! alternatives while collecting text statistics.
//! License: MIT OR APACHE 2.0

use anyhow::anyhow;
use lazy_static::lazy_static;
use log::{debug, error, info, warn};
use regex::Regex;
use std::sync::Arc;

use lexiclean_metrics::readability::{flesch_reading_ease, reading_time_minutes, ReadabilityError};
use lexiclean_metrics::structure::{count_paragraphs, count_sentences};
use lexiclean_metrics::syllables::estimate_syllables;

use crate::config::EngineConfig;
use crate::dictionary::source::{DirectorySource, EmbeddedSource};
use crate::dictionary::store::DictionaryStore;
use crate::dictionary::DictionaryEntry;
use crate::engine::{DetachedProgress, ProgressCallback, SanitizationEngine};
use crate::errors::{LoadError, ProcessError};
use crate::markup::{resolve_markers, HighlightMarkup, MarkedText};
use crate::masking::log_replacement_debug;
use crate::selection::{ReplacementPicker, SeededPicker, ThreadRngPicker};
use crate::statistics::{SegmentTracker, TextStatistics};

lazy_static! {
    /// Word tokens: maximal runs of Unicode word characters.
    static ref WORD_REGEX: Regex = Regex::new(r"\b\w+\b").expect("word pattern must compile");
}

#[derive(Debug)]
pub struct ReplacementEngine {
    store: Arc<DictionaryStore>,
    picker: Arc<dyn ReplacementPicker>,
    markup: HighlightMarkup,
}

impl ReplacementEngine {
    /// An engine over `store` with random selection and HTML highlight tags.
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        Self {
            store,
            picker: Arc::new(ThreadRngPicker),
            markup: HighlightMarkup::html(),
        }
    }

    /// Builds an engine from configuration. The dictionary is not loaded yet.
    pub fn from_config(config: &EngineConfig) -> Self {
        let store = match &config.dictionary.directory {
            Some(dir) => DictionaryStore::new(DirectorySource::new(dir)),
            None => DictionaryStore::new(EmbeddedSource),
        };

        let engine = Self::new(Arc::new(store)).with_markup(config.highlight.clone());
        match config.seed {
            Some(seed) => {
                debug!("Using seeded replacement selection (seed {})", seed);
                engine.with_picker(SeededPicker::new(seed))
            }
            None => engine,
        }
    }

    pub fn with_picker<P: ReplacementPicker + 'static>(mut self, picker: P) -> Self {
        self.picker = Arc::new(picker);
        self
    }

    pub fn with_markup(mut self, markup: HighlightMarkup) -> Self {
        self.markup = markup;
        self
    }

    fn choose<'e>(&self, entry: &'e DictionaryEntry) -> Result<&'e str, ProcessError> {
        let len = entry.replacement_options.len();
        let index = self.picker.pick(len);
        entry
            .replacement_options
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| {
                ProcessError::ProcessingFailure(anyhow!(
                    "replacement picker returned index {} for {} options",
                    index,
                    len
                ))
            })
    }

    /// Runs [`SanitizationEngine::process`] on tokio's blocking pool.
    ///
    /// For callers living on an async runtime; the scan itself is unchanged.
    pub async fn process_detached(
        self: Arc<Self>,
        text: String,
        on_progress: Option<DetachedProgress>,
    ) -> Result<(String, TextStatistics), ProcessError> {
        let task = tokio::task::spawn_blocking(move || {
            let mut on_progress = on_progress;
            match on_progress.as_mut() {
                Some(callback) => {
                    let callback: ProgressCallback<'_> = &mut **callback;
                    self.process(&text, Some(callback))
                }
                None => self.process(&text, None),
            }
        });

        task.await.map_err(|e| {
            ProcessError::ProcessingFailure(anyhow!("background processing task failed: {}", e))
        })?
    }

    fn score_readability(total_words: usize, sentence_count: usize, total_syllables: u64) -> f64 {
        match flesch_reading_ease(total_words, sentence_count, total_syllables) {
            Ok(score) => {
                info!("Calculated Readability Score (FK): {:.3}", score);
                score
            }
            Err(ReadabilityError::NonFinite) => {
                error!("Overflow calculating readability score.");
                0.0
            }
            Err(reason) => {
                warn!(
                    "Cannot calculate readability score ({}): Sentences={}, Words={}",
                    reason, sentence_count, total_words
                );
                0.0
            }
        }
    }
}

impl SanitizationEngine for ReplacementEngine {
    fn load(&self, variant: &str) -> Result<(), LoadError> {
        self.store.load(variant)
    }

    fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    fn active_variant(&self) -> String {
        self.store.active_variant()
    }

    fn process(
        &self,
        text: &str,
        mut on_progress: Option<ProgressCallback<'_>>,
    ) -> Result<(String, TextStatistics), ProcessError> {
        let dictionary = self.store.snapshot().ok_or(ProcessError::NotInitialized)?;

        let words: Vec<regex::Match<'_>> = WORD_REGEX.find_iter(text).collect();
        let total_words = words.len();
        debug!(
            "Processing {} words against dictionary '{}' ({} entries)",
            total_words,
            dictionary.variant(),
            dictionary.len()
        );

        let mut stats = TextStatistics {
            total_words,
            total_characters: text.chars().count(),
            sentence_count: count_sentences(text),
            paragraph_count: count_paragraphs(text),
            ..TextStatistics::default()
        };
        let mut segments = SegmentTracker::new(total_words);
        let mut marked = MarkedText::with_capacity(total_words * 2 + 1);
        let mut last_end = 0usize;
        let mut total_syllables: u64 = 0;

        for (i, token) in words.iter().enumerate() {
            let word_index = i + 1;
            let word = token.as_str();

            marked.push_plain(&text[last_end..token.start()]);
            total_syllables += u64::from(estimate_syllables(word));

            match dictionary.lookup(word) {
                Some(entry) => {
                    stats.record_replacement(word);
                    segments.record_hit();
                    let replacement = self.choose(entry)?;
                    log_replacement_debug(word_index, word, replacement);
                    marked.push_replacement(replacement);
                }
                None => marked.push_plain(word),
            }
            last_end = token.end();

            segments.advance(word_index);

            if let Some(callback) = on_progress.as_deref_mut() {
                callback(word_index as f64 / total_words as f64).map_err(|e| {
                    ProcessError::ProcessingFailure(
                        e.context(format!("progress callback failed at word {}", word_index)),
                    )
                })?;
            }
        }
        marked.push_plain(&text[last_end..]);

        let processed = resolve_markers(&marked, &self.markup);
        stats.graph_data = segments.finish();

        info!("Calculating enhanced statistics...");
        debug!("Total estimated syllables: {}", total_syllables);

        stats.reading_time_minutes = reading_time_minutes(total_words);
        debug!("Estimated reading time: {:.3} minutes", stats.reading_time_minutes);

        stats.readability_score =
            Self::score_readability(total_words, stats.sentence_count, total_syllables);

        info!(
            "Processed {} words, replaced {}.",
            stats.total_words, stats.replaced_words_count
        );
        Ok((processed, stats))
    }
}
