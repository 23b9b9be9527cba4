// lexiclean-core/src/dictionary/mod.rs
//! Dictionary data model and record parsing.
//!
//! A dictionary is a list of records, each naming a flagged word and the
//! alternatives it may be replaced with. Records arrive either as a bare array
//! or wrapped in a `{ "words": [...] }` object, in JSON or YAML. Both
//! `snake_case` and `camelCase` key spellings are accepted.
//!
//! * `source`: where record lists come from (embedded resources or a directory).
//! * `store`: the shared, snapshot-swapping [`DictionaryStore`].
//!
//! License: MIT OR Apache-2.0

pub mod source;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LoadError;

/// Severity class of a flagged word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WordCategory {
    #[default]
    Profanity,
    Slur,
    Inappropriate,
    Offensive,
    Mild,
}

impl WordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profanity => "Profanity",
            Self::Slur => "Slur",
            Self::Inappropriate => "Inappropriate",
            Self::Offensive => "Offensive",
            Self::Mild => "Mild",
        }
    }
}

impl FromStr for WordCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "profanity" => Ok(Self::Profanity),
            "slur" => Ok(Self::Slur),
            "inappropriate" => Ok(Self::Inappropriate),
            "offensive" => Ok(Self::Offensive),
            "mild" => Ok(Self::Mild),
            other => Err(format!("unknown word category '{}'", other)),
        }
    }
}

impl TryFrom<String> for WordCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WordCategory> for String {
    fn from(value: WordCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical role of a flagged word. Unrecognised names map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    #[default]
    Unknown,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Verb => "Verb",
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
            Self::Pronoun => "Pronoun",
            Self::Preposition => "Preposition",
            Self::Conjunction => "Conjunction",
            Self::Interjection => "Interjection",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "noun" => Self::Noun,
            "verb" => Self::Verb,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "pronoun" => Self::Pronoun,
            "preposition" => Self::Preposition,
            "conjunction" => Self::Conjunction,
            "interjection" => Self::Interjection,
            _ => Self::Unknown,
        }
    }
}

impl From<PartOfSpeech> for String {
    fn from(value: PartOfSpeech) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged word together with its replacement options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub original_word: String,
    /// Never empty for an entry that made it into a store.
    pub replacement_options: Vec<String>,
    pub category: WordCategory,
    pub part_of_speech: PartOfSpeech,
}

/// One record as it appears in a dictionary resource.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryRecord {
    #[serde(alias = "originalWord")]
    pub original_word: String,
    #[serde(alias = "replacementOptions", default)]
    pub replacement_options: Vec<String>,
    #[serde(default)]
    pub category: WordCategory,
    #[serde(alias = "partOfSpeech", default)]
    pub part_of_speech: PartOfSpeech,
}

impl DictionaryRecord {
    /// Converts the record into an entry, rejecting records with no options.
    pub fn into_entry(self, resource: &str) -> Result<DictionaryEntry, LoadError> {
        let replacement_options: Vec<String> = self
            .replacement_options
            .into_iter()
            .filter(|option| !option.is_empty())
            .collect();

        if replacement_options.is_empty() {
            return Err(LoadError::malformed(
                resource,
                format!("word '{}' has no replacement options", self.original_word),
            ));
        }

        Ok(DictionaryEntry {
            original_word: self.original_word,
            replacement_options,
            category: self.category,
            part_of_speech: self.part_of_speech,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordList {
    Wrapped { words: Vec<DictionaryRecord> },
    Bare(Vec<DictionaryRecord>),
}

impl From<RecordList> for Vec<DictionaryRecord> {
    fn from(list: RecordList) -> Self {
        match list {
            RecordList::Wrapped { words } => words,
            RecordList::Bare(words) => words,
        }
    }
}

/// Serialization format of a dictionary resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

/// Parses a dictionary resource into its raw records.
pub fn parse_records(
    resource: &str,
    raw: &str,
    format: RecordFormat,
) -> Result<Vec<DictionaryRecord>, LoadError> {
    let parsed: RecordList = match format {
        RecordFormat::Json => serde_json::from_str(raw)
            .map_err(|e| LoadError::malformed(resource, e.to_string()))?,
        RecordFormat::Yaml => serde_yml::from_str(raw)
            .map_err(|e| LoadError::malformed(resource, e.to_string()))?,
    };
    Ok(parsed.into())
}

/// The named dictionary configurations. Loading one replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictionaryVariant {
    #[default]
    Default,
    Buzzwords,
}

impl DictionaryVariant {
    /// Resolves a variant name case-insensitively; unknown names fall back to `Default`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "buzzwords" => Self::Buzzwords,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Buzzwords => "buzzwords",
        }
    }

    /// Base name (no extension) of the resource backing this variant.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Default => "word_replacements",
            Self::Buzzwords => "word_replacements_buzzwords",
        }
    }

    pub fn all() -> &'static [DictionaryVariant] {
        &[Self::Default, Self::Buzzwords]
    }
}

impl fmt::Display for DictionaryVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
