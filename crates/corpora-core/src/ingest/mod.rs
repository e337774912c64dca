mod boundary;
mod corpus;
mod normalizer;
mod pipeline;
mod stopwords;
mod tokenizer;

pub use boundary::{
    trim, BoundaryError, BoundaryErrorKind, BoundaryMarkers, BoundaryResult, TrimmedText,
    GUTENBERG_END, GUTENBERG_START,
};
pub use corpus::Corpus;
pub use normalizer::{normalize, SentenceUnit};
pub use pipeline::{
    build_corpus, BatchCorpusResult, CorpusOutput, CorpusPipeline, CorpusStats, PipelineError,
    PipelineResult, Stage, StageError,
};
pub use stopwords::{filter, LanguageStopwords, StaticStopwords, StopwordSet, StopwordSource};
pub use tokenizer::{tokenize, tokenize_all, Token};
