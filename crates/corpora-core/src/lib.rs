#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod fetch;
pub mod ingest;

pub use config::{BoundaryConfig, PipelineConfig, StopwordConfig};
pub use error::{Error, Result};
pub use fetch::{
    Document, FetchCause, FetchConfig, FetchError, FetchResult, Fetcher, FileFetcher,
    HttpFetcher, LocatorFetcher,
};
pub use ingest::{
    build_corpus, filter, normalize, tokenize, trim, BatchCorpusResult, BoundaryError,
    BoundaryErrorKind, BoundaryMarkers, Corpus, CorpusOutput, CorpusPipeline, CorpusStats,
    LanguageStopwords, PipelineError, PipelineResult, SentenceUnit, Stage, StageError,
    StaticStopwords, StopwordSet, StopwordSource, Token, TrimmedText,
};
