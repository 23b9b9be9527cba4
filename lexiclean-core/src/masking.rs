// lexiclean-core/src/masking.rs
//! Keeps flagged words out of debug logs unless explicitly allowed.
//!
//! Set `LEXICLEAN_ALLOW_DEBUG_WORDS=true` to log flagged words verbatim.

use lazy_static::lazy_static;
use log::debug;

lazy_static! {
    /// Read once; flipping the variable mid-run has no effect.
    static ref DEBUG_WORDS_ALLOWED: bool = {
        std::env::var("LEXICLEAN_ALLOW_DEBUG_WORDS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn mask_word(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[MASKED]".to_string()
    } else {
        format!("[MASKED: {} chars]", len)
    }
}

/// The form of a flagged word that may appear in logs.
pub fn loggable_word(word: &str) -> String {
    if *DEBUG_WORDS_ALLOWED {
        word.to_string()
    } else {
        mask_word(word)
    }
}

pub fn log_replacement_debug(word_index: usize, original: &str, replacement: &str) {
    debug!(
        "Replaced word #{}: Original='{}', Replacement='{}'",
        word_index,
        loggable_word(original),
        replacement
    );
}
