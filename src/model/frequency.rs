use crate::error::{MarkovError, MkResult};
use crate::model::types::{Ngram, WordFrequency};
use crate::tokenizer;

/// Largest window the fact renderer has declaration and slot names for.
pub const MAX_WINDOW_SIZE: usize = 10;

pub fn check_window_size(n: usize) -> MkResult<()> {
    if n == 0 || n > MAX_WINDOW_SIZE {
        return Err(MarkovError::InvalidWindowSize(n));
    }
    Ok(())
}

/// Counts every token across all messages.
pub fn word_frequency<S: AsRef<str>>(messages: &[S]) -> WordFrequency {
    let mut freqs = WordFrequency::new();
    for message in messages {
        for token in tokenizer::tokens(message.as_ref()) {
            *freqs.entry(token.to_string()).or_default() += 1;
        }
    }
    freqs
}

/// Counts every width-`n` window across all messages.
///
/// Windows never span two messages, and a message with fewer than `n` tokens
/// contributes nothing.
pub fn ngram<S: AsRef<str>>(messages: &[S], n: usize) -> MkResult<Ngram> {
    check_window_size(n)?;

    let mut ngram = Ngram::empty(n);
    for message in messages {
        let words = tokenizer::tokenize(message.as_ref());
        if words.len() < n {
            continue;
        }
        for window in words.windows(n) {
            *ngram.grams.entry(window.join(" ")).or_default() += 1;
        }
    }
    Ok(ngram)
}
