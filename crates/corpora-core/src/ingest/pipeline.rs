use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::boundary::{BoundaryError, BoundaryErrorKind, BoundaryMarkers};
use super::corpus::Corpus;
use super::normalizer::normalize;
use super::stopwords::{filter, LanguageStopwords, StopwordSet};
use super::tokenizer::tokenize_all;
use crate::config::PipelineConfig;
use crate::fetch::{FetchError, Fetcher, LocatorFetcher};

/// Pipeline stages in execution order.
///
/// Only `Fetcher` and `BoundaryTrimmer` can fail; the remaining variants name
/// the infallible stages for logging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fetcher,
    BoundaryTrimmer,
    Normalizer,
    Tokenizer,
    StopwordFilter,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fetcher => "fetcher",
            Self::BoundaryTrimmer => "boundary trimmer",
            Self::Normalizer => "normalizer",
            Self::Tokenizer => "tokenizer",
            Self::StopwordFilter => "stopword filter",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

#[derive(Debug, Error)]
#[error("{stage} stage failed for {locator}")]
pub struct PipelineError {
    pub locator: String,
    pub stage: Stage,
    #[source]
    pub cause: StageError,
}

impl PipelineError {
    fn new(locator: &str, stage: Stage, cause: impl Into<StageError>) -> Self {
        Self {
            locator: locator.to_string(),
            stage,
            cause: cause.into(),
        }
    }

    pub const fn boundary_kind(&self) -> Option<BoundaryErrorKind> {
        match &self.cause {
            StageError::Boundary(e) => Some(e.kind),
            StageError::Fetch(_) => None,
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub raw_bytes: usize,
    pub trimmed_bytes: usize,
    pub sentences: usize,
    pub tokens_before_filter: usize,
    pub tokens_after_filter: usize,
    pub duration_ms: u64,
}

impl CorpusStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn tokens_removed(&self) -> usize {
        self.tokens_before_filter.saturating_sub(self.tokens_after_filter)
    }

    fn absorb(&mut self, other: &Self) {
        self.raw_bytes += other.raw_bytes;
        self.trimmed_bytes += other.trimmed_bytes;
        self.sentences += other.sentences;
        self.tokens_before_filter += other.tokens_before_filter;
        self.tokens_after_filter += other.tokens_after_filter;
        self.duration_ms += other.duration_ms;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusOutput {
    pub locator: String,
    pub corpus: Corpus,
    pub stats: CorpusStats,
}

/// Trim, normalize, tokenize and filter raw text already in memory.
fn process(
    locator: &str,
    raw: &str,
    markers: &BoundaryMarkers,
    excluded: &StopwordSet,
    stats: &mut CorpusStats,
) -> PipelineResult<Corpus> {
    stats.raw_bytes = raw.len();

    let trimmed = markers
        .trim(raw)
        .map_err(|e| PipelineError::new(locator, Stage::BoundaryTrimmer, e))?;
    stats.trimmed_bytes = trimmed.len();
    tracing::debug!(
        "Trimmed {} to bytes {}..{}",
        locator,
        trimmed.start_offset,
        trimmed.end_offset
    );

    let units = normalize(trimmed.text);
    stats.sentences = units.len();

    let tokenized = tokenize_all(&units);
    stats.tokens_before_filter = tokenized.iter().map(Vec::len).sum();

    let sentences: Vec<_> = tokenized
        .iter()
        .map(|tokens| filter(tokens, excluded))
        .collect();
    let corpus = Corpus::new(sentences);
    stats.tokens_after_filter = corpus.token_count();

    tracing::debug!(
        "{}: {} sentences, {} of {} tokens kept",
        locator,
        stats.sentences,
        stats.tokens_after_filter,
        stats.tokens_before_filter
    );

    Ok(corpus)
}

/// Fetch `locator` and turn it into a filtered corpus.
///
/// The first failing stage aborts the run; no partial corpus is returned.
pub async fn build_corpus(
    fetcher: &dyn Fetcher,
    locator: &str,
    markers: &BoundaryMarkers,
    excluded: &StopwordSet,
) -> PipelineResult<Corpus> {
    let document = fetcher
        .fetch(locator)
        .await
        .map_err(|e| PipelineError::new(locator, Stage::Fetcher, e))?;

    process(locator, &document.text, markers, excluded, &mut CorpusStats::new())
}

pub struct CorpusPipeline {
    fetcher: Box<dyn Fetcher>,
    markers: BoundaryMarkers,
    stopwords: StopwordSet,
}

impl CorpusPipeline {
    /// Gutenberg markers and the English stopword list around `fetcher`.
    pub fn new(fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            markers: BoundaryMarkers::gutenberg(),
            stopwords: StopwordSet::from_source(&LanguageStopwords::english()),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> crate::Result<Self> {
        let fetcher = LocatorFetcher::new(config.fetch.clone())?;

        Ok(Self {
            fetcher: Box::new(fetcher),
            markers: config.boundaries.markers()?,
            stopwords: config.stopwords.build()?,
        })
    }

    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: BoundaryMarkers) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub const fn markers(&self) -> &BoundaryMarkers {
        &self.markers
    }

    pub const fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub async fn build_corpus(&self, locator: &str) -> PipelineResult<CorpusOutput> {
        let start = Instant::now();

        let document = self
            .fetcher
            .fetch(locator)
            .await
            .map_err(|e| PipelineError::new(locator, Stage::Fetcher, e))?;

        self.finish(locator, &document.text, start)
    }

    pub fn build_corpus_from_text(&self, locator: &str, raw: &str) -> PipelineResult<CorpusOutput> {
        self.finish(locator, raw, Instant::now())
    }

    fn finish(&self, locator: &str, raw: &str, start: Instant) -> PipelineResult<CorpusOutput> {
        let mut stats = CorpusStats::new();
        let corpus = process(locator, raw, &self.markers, &self.stopwords, &mut stats)?;
        stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::info!(
            "Built corpus from {}: {} sentences, {} tokens",
            locator,
            corpus.len(),
            corpus.token_count()
        );

        Ok(CorpusOutput {
            locator: locator.to_string(),
            corpus,
            stats,
        })
    }

    /// Build each locator independently; one failure does not stop the rest.
    pub async fn build_corpora(&self, locators: &[&str]) -> BatchCorpusResult {
        let mut result = BatchCorpusResult::new();

        for locator in locators {
            match self.build_corpus(locator).await {
                Ok(output) => result.add_success(output),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", locator, e);
                    result.add_failure((*locator).to_string(), e);
                }
            }
        }

        result
    }
}

#[derive(Debug, Default)]
pub struct BatchCorpusResult {
    pub successful: Vec<CorpusOutput>,
    pub failed: Vec<(String, PipelineError)>,
    pub total_stats: CorpusStats,
}

impl BatchCorpusResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add_success(&mut self, output: CorpusOutput) {
        self.total_stats.absorb(&output.stats);
        self.successful.push(output);
    }

    fn add_failure(&mut self, locator: String, error: PipelineError) {
        self.failed.push((locator, error));
    }

    pub fn success_count(&self) -> usize {
        self.successful.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }
}
