//! CLIPS fact rendering.
//!
//! Each model becomes one `deffacts` block:
//!
//! ```text
//! (deffacts message-data-42
//!    ; word frequencies
//!    (word (name "hey") (frequency 2))
//!    ; bigram frequencies
//!    (bigram (first-word "hey") (second-word "what") (frequency 1))
//! )
//! ```
//!
//! Facts inside a section follow hash-map order and are not sorted.

use crate::error::{MarkovError, MkResult};
use crate::model::{ModelSet, Ngram, StatisticalModel, MAX_WINDOW_SIZE};
use rayon::prelude::*;

/// Fact declaration per window size, index `n - 1`.
pub const DECLARATION_NAMES: [&str; MAX_WINDOW_SIZE] = [
    "word",
    "bigram",
    "trigram",
    "quadgram",
    "pentagram",
    "hexagram",
    "heptagram",
    "octagram",
    "nonogram",
    "dectogram",
];

/// Slot per word position, index `position - 1`.
pub const SLOT_NAMES: [&str; MAX_WINDOW_SIZE] = [
    "first-word",
    "second-word",
    "third-word",
    "fourth-word",
    "fifth-word",
    "sixth-word",
    "seventh-word",
    "eighth-word",
    "ninth-word",
    "tenth-word",
];

const INDENT: &str = "   ";

// Fixed characters of one fact line, excluding the quoted words.
const WORD_LINE_OVERHEAD: usize = 48;
const GRAM_LINE_OVERHEAD: usize = 40;
const SLOT_OVERHEAD: usize = 18;
const BLOCK_OVERHEAD: usize = 96;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModel {
    pub id: String,
    pub name: String,
    pub text: String,
}

pub fn declaration_name(n: usize) -> MkResult<&'static str> {
    match n {
        1..=MAX_WINDOW_SIZE => Ok(DECLARATION_NAMES[n - 1]),
        _ => Err(MarkovError::UnsupportedWindowSize(n)),
    }
}

/// Appends `s` with backslashes doubled and quotes backslash-escaped.
pub fn escape_into(buf: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\\' => buf.push_str("\\\\"),
            '"' => buf.push_str("\\\""),
            _ => buf.push(c),
        }
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

/// Encodes a user id as CLIPS symbol characters.
///
/// Alphanumerics and `-` pass through; anything else, `_` included, becomes
/// `_<hex codepoint>_`, so distinct ids never share a symbol.
pub fn symbol_fragment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
        } else {
            out.push_str(&format!("_{:x}_", c as u32));
        }
    }
    out
}

fn estimate_capacity(id: &str, model: &StatisticalModel) -> usize {
    let words: usize = model
        .word_frequency
        .keys()
        .map(|w| w.len() + WORD_LINE_OVERHEAD)
        .sum();
    let grams: usize = model
        .ngrams
        .iter()
        .map(|ngram| {
            let per_gram = GRAM_LINE_OVERHEAD + ngram.n * SLOT_OVERHEAD;
            ngram.grams.keys().map(|g| g.len() + per_gram).sum::<usize>()
        })
        .sum();
    BLOCK_OVERHEAD + id.len() + words + grams
}

fn render_ngram(buf: &mut String, ngram: &Ngram) -> MkResult<()> {
    let declaration = declaration_name(ngram.n)?;
    buf.push_str(&format!("{INDENT}; {declaration} frequencies\n"));

    for (gram, freq) in &ngram.grams {
        let words: Vec<&str> = gram.split(' ').collect();
        if words.len() != ngram.n {
            return Err(MarkovError::GramArity {
                gram: gram.clone(),
                n: ngram.n,
            });
        }

        buf.push_str(INDENT);
        buf.push('(');
        buf.push_str(declaration);
        for (slot, word) in SLOT_NAMES.iter().zip(words) {
            buf.push_str(" (");
            buf.push_str(slot);
            buf.push_str(" \"");
            escape_into(buf, word);
            buf.push_str("\")");
        }
        buf.push_str(&format!(" (frequency {freq}))\n"));
    }
    Ok(())
}

/// Renders one model as a `deffacts` block.
pub fn render_model(id: &str, model: &StatisticalModel) -> MkResult<String> {
    let mut buf = String::with_capacity(estimate_capacity(id, model));

    buf.push_str(&format!("(deffacts message-data-{}\n", symbol_fragment(id)));
    buf.push_str(&format!("{INDENT}; word frequencies\n"));
    for (word, freq) in &model.word_frequency {
        buf.push_str(INDENT);
        buf.push_str("(word (name \"");
        escape_into(&mut buf, word);
        buf.push_str(&format!("\") (frequency {freq}))\n"));
    }
    for ngram in &model.ngrams {
        render_ngram(&mut buf, ngram)?;
    }
    buf.push_str(")\n");

    Ok(buf)
}

/// Renders every model in parallel, sorted by user id.
pub fn render_all(models: &ModelSet) -> MkResult<Vec<RenderedModel>> {
    let mut rendered = models
        .par_iter()
        .map(|(id, model)| -> MkResult<RenderedModel> {
            Ok(RenderedModel {
                id: id.clone(),
                name: model.name.clone(),
                text: render_model(id, model)?,
            })
        })
        .collect::<MkResult<Vec<_>>>()?;
    rendered.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(rendered)
}

/// The `deftemplate`s the rendered facts rely on.
pub fn render_templates(window_sizes: &[usize]) -> MkResult<String> {
    let mut buf = String::new();
    let unigrams = window_sizes.contains(&1);

    buf.push_str("(deftemplate word\n");
    buf.push_str(&format!("{INDENT}(slot name)\n"));
    if unigrams {
        buf.push_str(&format!("{INDENT}(slot {})\n", SLOT_NAMES[0]));
    }
    buf.push_str(&format!("{INDENT}(slot frequency (type INTEGER)))\n"));

    for &n in window_sizes {
        let declaration = declaration_name(n)?;
        if n == 1 {
            continue;
        }
        buf.push_str(&format!("\n(deftemplate {declaration}\n"));
        for slot in &SLOT_NAMES[..n] {
            buf.push_str(&format!("{INDENT}(slot {slot})\n"));
        }
        buf.push_str(&format!("{INDENT}(slot frequency (type INTEGER)))\n"));
    }
    Ok(buf)
}
