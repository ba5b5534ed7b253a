//! Token occurrence counting over a single text.
//!
//! A text is any ordered sequence of tokens. Matching is exact, case-sensitive
//! equality of whole tokens; no normalization or substring matching is done.

/// Count `word0` and `word1` in one pass over `text`.
#[inline]
pub fn count_pair<W: AsRef<str>>(text: &[W], word0: &str, word1: &str) -> (usize, usize) {
    text.iter().fold((0, 0), |(c0, c1), token| {
        let token = token.as_ref();
        (
            c0 + usize::from(token == word0),
            c1 + usize::from(token == word1),
        )
    })
}
