// lexiclean-core/src/statistics.rs
//! Statistics produced by one processing call, and the segment tracker that
//! fills `graph_data` during the scan.
//!
//! License: MIT OR Apache-2.0

use serde::Serialize;
use std::collections::BTreeMap;

/// Number of segments the text is split into for density reporting.
pub const TARGET_SEGMENTS: usize = 10;

/// Replacement density for one flushed segment of the text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct SegmentPoint {
    /// Index of the flush event, not of a word.
    pub segment_index: usize,
    /// Replacements observed since the previous flush.
    pub inappropriate_word_count: usize,
    /// Cumulative progress at flush time, 0 to 100.
    pub percentage_complete: f64,
}

/// Everything measured about a text during one `process` call.
///
/// Created fresh per call and handed to the caller; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TextStatistics {
    pub total_words: usize,
    pub total_characters: usize,
    pub replaced_words_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Keyed by the surface form found in the text, not the normalized word.
    pub replacement_frequency: BTreeMap<String, usize>,
    pub graph_data: Vec<SegmentPoint>,
    pub reading_time_minutes: f64,
    pub readability_score: f64,
}

impl TextStatistics {
    /// The `n` most frequently replaced words, by count then alphabetically.
    pub fn top_replacements(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .replacement_frequency
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    pub(crate) fn record_replacement(&mut self, surface_form: &str) {
        self.replaced_words_count += 1;
        *self
            .replacement_frequency
            .entry(surface_form.to_string())
            .or_insert(0) += 1;
    }
}

/// Accumulates replacements into roughly [`TARGET_SEGMENTS`] buckets.
#[derive(Debug)]
pub(crate) struct SegmentTracker {
    total_words: usize,
    segment_size: usize,
    next_index: usize,
    pending: usize,
    points: Vec<SegmentPoint>,
}

impl SegmentTracker {
    pub(crate) fn new(total_words: usize) -> Self {
        let segment_size = (total_words / TARGET_SEGMENTS).max(1);
        Self {
            total_words,
            segment_size,
            next_index: 0,
            pending: 0,
            points: Vec::with_capacity(TARGET_SEGMENTS + 1),
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.pending += 1;
    }

    /// Called once per token with the 1-based word index, after the token's
    /// counters are updated. Flushes on segment boundaries and on the last word.
    pub(crate) fn advance(&mut self, word_index: usize) {
        if word_index % self.segment_size == 0 || word_index == self.total_words {
            self.points.push(SegmentPoint {
                segment_index: self.next_index,
                inappropriate_word_count: self.pending,
                percentage_complete: word_index as f64 / self.total_words as f64 * 100.0,
            });
            self.next_index += 1;
            self.pending = 0;
        }
    }

    pub(crate) fn finish(self) -> Vec<SegmentPoint> {
        self.points
    }
}
