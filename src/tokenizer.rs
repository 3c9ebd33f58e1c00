//! Whitespace tokenizer shared by every frequency table.
//!
//! Tokens are raw substrings of the message: no case folding, no punctuation
//! stripping. Runs of separators collapse, so a token never contains one and
//! joining a window with a single space is always reversible.

const SEPARATORS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Lazily yields the tokens of `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(SEPARATORS).filter(|t| !t.is_empty())
}

/// Collects the tokens of `text` in order.
pub fn tokenize(text: &str) -> Vec<&str> {
    tokens(text).collect()
}
