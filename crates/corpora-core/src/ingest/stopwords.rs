//! Stopword sources and filtering.
//!
//! Word lists come from an injected [`StopwordSource`]; [`StopwordSet`]
//! freezes them (plus the empty token) for the duration of a pipeline run.

use std::collections::HashSet;

use stop_words::LANGUAGE;

use super::tokenizer::Token;

/// Supplier of language-specific stopword lists.
pub trait StopwordSource: Send + Sync {
    fn words(&self) -> Vec<String>;
}

fn nltk_language(name: &str) -> Option<LANGUAGE> {
    let language = match name {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        _ => return None,
    };
    Some(language)
}

/// Stopword lists bundled with the `stop-words` crate (NLTK lists).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStopwords {
    language: String,
}

impl LanguageStopwords {
    /// Look up a list by ISO 639-1 code or English language name.
    pub fn new(language: &str) -> crate::Result<Self> {
        let language = language.to_lowercase();
        if nltk_language(&language).is_none() {
            return Err(crate::Error::UnknownLanguage(language));
        }
        Ok(Self { language })
    }

    #[must_use]
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for LanguageStopwords {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordSource for LanguageStopwords {
    fn words(&self) -> Vec<String> {
        nltk_language(&self.language).map_or_else(Vec::new, |language| {
            stop_words::get(language)
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }
}

/// Explicit, caller-supplied word list.
#[derive(Debug, Clone, Default)]
pub struct StaticStopwords {
    words: Vec<String>,
}

impl StaticStopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl StopwordSource for StaticStopwords {
    fn words(&self) -> Vec<String> {
        self.words.clone()
    }
}

/// Tokens excluded from the final corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<Token>,
}

impl StopwordSet {
    /// A set that excludes nothing, not even the empty token.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The source's words, lowercased, plus the empty token.
    pub fn from_source(source: &dyn StopwordSource) -> Self {
        let mut words: HashSet<Token> = source.words().iter().map(|w| w.to_lowercase()).collect();
        words.insert(String::new());
        Self { words }
    }

    #[must_use]
    pub fn with_words<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words
            .extend(extra.into_iter().map(|w| Into::<String>::into(w).to_lowercase()));
        self
    }

    #[must_use]
    pub fn without(mut self, token: &str) -> Self {
        self.words.remove(token);
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Keeps the tokens not in `excluded`, in their original order.
pub fn filter(tokens: &[Token], excluded: &StopwordSet) -> Vec<Token> {
    tokens
        .iter()
        .filter(|token| !excluded.contains(token))
        .cloned()
        .collect()
}
