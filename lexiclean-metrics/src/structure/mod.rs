// lexiclean-metrics/src/structure/mod.rs

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Counts the non-empty pieces of `text` between sentence terminators.
///
/// Whitespace-only pieces still count; only zero-length pieces are dropped.
pub fn count_sentences(text: &str) -> usize {
    text.split(SENTENCE_TERMINATORS)
        .filter(|piece| !piece.is_empty())
        .count()
}

/// Counts paragraphs separated by a blank line (`"\r\n\r\n"` or `"\n\n"`).
///
/// Always at least 1, including for empty input. The CRLF separator wins
/// when both could match at the same position.
pub fn count_paragraphs(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 1;
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];
        if rest.starts_with(b"\r\n\r\n") {
            count += 1;
            i += 4;
        } else if rest.starts_with(b"\n\n") {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    count
}
