use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Token (or joined gram) to occurrence count.
pub type WordFrequency = HashMap<String, u64>;

/// All users of a run, keyed by user id.
pub type UserSet = HashMap<String, User>;

/// All generated models of a run, keyed by user id.
pub type ModelSet = HashMap<String, StatisticalModel>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub position: i64,
}

/// An author together with every message they wrote, oldest first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ngram {
    pub n: usize,
    pub grams: WordFrequency,
}

impl Ngram {
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            grams: WordFrequency::new(),
        }
    }

    /// Sum of all gram counts, i.e. the number of windows seen.
    pub fn total(&self) -> u64 {
        self.grams.values().sum()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalModel {
    pub name: String,
    pub word_frequency: WordFrequency,
    pub ngrams: Vec<Ngram>,
}

impl StatisticalModel {
    pub fn ngram(&self, n: usize) -> Option<&Ngram> {
        self.ngrams.iter().find(|g| g.n == n)
    }

    pub fn total_tokens(&self) -> u64 {
        self.word_frequency.values().sum()
    }
}
