// lexiclean-metrics/src/readability/mod.rs
use core::fmt;

use crate::ReadabilityScore;

/// Average adult silent-reading rate used for reading time estimates.
pub const WORDS_PER_MINUTE: f64 = 225.0;

/// Flesch reading-ease constants.
pub const FLESCH_BASE: f64 = 206.835;
pub const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
pub const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;

/// Reasons a readability score could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadabilityError {
    NoSentences,
    NoWords,
    NonFinite,
}

impl fmt::Display for ReadabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSentences => write!(f, "text contains no sentences"),
            Self::NoWords => write!(f, "text contains no words"),
            Self::NonFinite => write!(f, "readability score is not a finite number"),
        }
    }
}

/// Estimated minutes needed to read `total_words` words.
pub fn reading_time_minutes(total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    total_words as f64 / WORDS_PER_MINUTE
}

/// Computes the Flesch reading-ease score.
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
/// Higher values mean easier text. Callers that need a number regardless
/// should fall back to `0.0` on error.
pub fn flesch_reading_ease(
    total_words: usize,
    sentence_count: usize,
    total_syllables: u64,
) -> Result<ReadabilityScore, ReadabilityError> {
    if sentence_count == 0 {
        return Err(ReadabilityError::NoSentences);
    }
    if total_words == 0 {
        return Err(ReadabilityError::NoWords);
    }

    let words_per_sentence = total_words as f64 / sentence_count as f64;
    let syllables_per_word = total_syllables as f64 / total_words as f64;

    let score = FLESCH_BASE
        - (FLESCH_SENTENCE_WEIGHT * words_per_sentence)
        - (FLESCH_SYLLABLE_WEIGHT * syllables_per_word);

    if score.is_finite() {
        Ok(score)
    } else {
        Err(ReadabilityError::NonFinite)
    }
}
