// lexiclean-metrics/src/syllables/mod.rs
use alloc::string::String;
use alloc::vec::Vec;

/// Characters stripped from both ends of a word before it is measured.
const TRIM_CHARS: &[char] = &['\'', '"', '.', ',', '!', '?', ':', ';'];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Counts maximal runs of `[aeiouy]` in an already lower-cased word.
pub fn count_vowel_groups(word: &str) -> u32 {
    let mut groups = 0;
    let mut in_group = false;

    for c in word.chars() {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
                in_group = true;
            }
        } else {
            in_group = false;
        }
    }

    groups
}

/// Estimates the number of syllables in a word.
///
/// This is a rule-of-thumb count of vowel groups with a silent-`e` correction,
/// not a phonetic syllabification. Blank input yields 0, any other input at least 1.
pub fn estimate_syllables(word: &str) -> u32 {
    if word.trim().is_empty() {
        return 0;
    }

    let lowered: String = word.chars().flat_map(char::to_lowercase).collect();
    let cleaned = lowered.trim_matches(TRIM_CHARS);
    let chars: Vec<char> = cleaned.chars().collect();

    if chars.len() <= 3 {
        return 1;
    }

    let mut count = count_vowel_groups(cleaned);

    if cleaned.ends_with('e') && !cleaned.ends_with("le") && count > 1 {
        if !is_vowel(chars[chars.len() - 2]) {
            count -= 1;
        }
    } else if cleaned.ends_with("le") && !is_vowel(chars[chars.len() - 3]) {
        // consonant + "le" already forms its own vowel group
    }

    count.max(1)
}
