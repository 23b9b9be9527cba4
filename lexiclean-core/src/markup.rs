// lexiclean-core/src/markup.rs
//! Replacement markup.
//!
//! During the scan the output is recorded as a sequence of pieces: untouched
//! input and chosen replacements. Tags are only attached when the pieces are
//! joined at the end of the pass, so input text can never be mistaken for a
//! replacement and the output never has to be re-scanned for flagged words.

use serde::{Deserialize, Serialize};

/// Default opening tag, highlighting a replacement in HTML output.
pub const HTML_OPEN_TAG: &str =
    "<mark style=\"background-color: yellow; border-radius: 3px; padding: 0 2px;\">";
pub const HTML_CLOSE_TAG: &str = "</mark>";

/// The tags replacements are wrapped in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightMarkup {
    pub open_tag: String,
    pub close_tag: String,
}

impl Default for HighlightMarkup {
    fn default() -> Self {
        Self::html()
    }
}

impl HighlightMarkup {
    pub fn new(open_tag: impl Into<String>, close_tag: impl Into<String>) -> Self {
        Self {
            open_tag: open_tag.into(),
            close_tag: close_tag.into(),
        }
    }

    pub fn html() -> Self {
        Self::new(HTML_OPEN_TAG, HTML_CLOSE_TAG)
    }

    /// Replacements appear as bare words.
    pub fn none() -> Self {
        Self::new("", "")
    }
}

/// One run of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Input copied through unchanged.
    Plain(&'a str),
    /// A replacement chosen from the dictionary.
    Replacement(&'a str),
}

/// Output of a pass, before tags are attached.
#[derive(Debug, Default, Clone)]
pub struct MarkedText<'a> {
    pieces: Vec<Piece<'a>>,
    text_len: usize,
}

impl<'a> MarkedText<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(pieces: usize) -> Self {
        Self {
            pieces: Vec::with_capacity(pieces),
            text_len: 0,
        }
    }

    pub fn push_plain(&mut self, text: &'a str) {
        if !text.is_empty() {
            self.text_len += text.len();
            self.pieces.push(Piece::Plain(text));
        }
    }

    pub fn push_replacement(&mut self, replacement: &'a str) {
        self.text_len += replacement.len();
        self.pieces.push(Piece::Replacement(replacement));
    }

    pub fn pieces(&self) -> &[Piece<'a>] {
        &self.pieces
    }

    pub fn replacement_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Replacement(_)))
            .count()
    }
}

/// Joins the pieces, wrapping each replacement in the configured tags.
pub fn resolve_markers(marked: &MarkedText<'_>, markup: &HighlightMarkup) -> String {
    let tag_len = markup.open_tag.len() + markup.close_tag.len();
    let mut out = String::with_capacity(marked.text_len + tag_len * marked.replacement_count());

    for piece in marked.pieces() {
        match piece {
            Piece::Plain(text) => out.push_str(text),
            Piece::Replacement(word) => {
                out.push_str(&markup.open_tag);
                out.push_str(word);
                out.push_str(&markup.close_tag);
            }
        }
    }
    out
}
