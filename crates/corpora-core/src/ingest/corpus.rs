use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tokenizer::Token;

/// Ordered token sequences, one per sentence unit.
///
/// Serializes as a plain JSON array of string arrays, the shape word-vector
/// trainers read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    sentences: Vec<Vec<Token>>,
}

impl Corpus {
    #[must_use]
    pub const fn new(sentences: Vec<Vec<Token>>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Vec<Token>] {
        &self.sentences
    }

    pub fn into_sentences(self) -> Vec<Vec<Token>> {
        self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Same corpus without sentences that filtered down to nothing.
    #[must_use]
    pub fn compact(&self) -> Self {
        Self {
            sentences: self
                .sentences
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect(),
        }
    }

    pub fn flatten(&self) -> Vec<&str> {
        self.sentences
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    pub fn joined(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.join(" ")).collect()
    }

    /// Token frequencies, most frequent first; ties ordered by token.
    pub fn vocabulary(&self) -> Vec<(&str, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in self.sentences.iter().flatten() {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut vocabulary: Vec<(&str, usize)> = counts.into_iter().collect();
        vocabulary.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        vocabulary
    }
}

impl From<Vec<Vec<Token>>> for Corpus {
    fn from(sentences: Vec<Vec<Token>>) -> Self {
        Self::new(sentences)
    }
}
