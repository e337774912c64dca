use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use corpora_core::CorpusPipeline;

use super::{load_config, StopwordArgs};

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// URL, file:// URL or local path of the document
    pub locator: String,
    /// Regex marking the start of the content (default: Project Gutenberg header)
    #[arg(long)]
    pub start: Option<String>,
    /// Regex marking the end of the content (default: Project Gutenberg footer)
    #[arg(long)]
    pub end: Option<String>,
    #[command(flatten)]
    pub stopwords: StopwordArgs,
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Write the corpus here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Leave out sentences with no remaining tokens
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(args: BuildArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(start) = args.start {
        config.boundaries.start = start;
    }
    if let Some(end) = args.end {
        config.boundaries.end = end;
    }
    args.stopwords.apply(&mut config.stopwords);

    let pipeline = CorpusPipeline::from_config(&config).context("configuring pipeline")?;
    let output = pipeline.build_corpus(&args.locator).await?;

    let corpus = if args.compact {
        output.corpus.compact()
    } else {
        output.corpus
    };
    let json = serde_json::to_string(&corpus)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("writing corpus to {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    let stats = &output.stats;
    eprintln!(
        "{}: {} sentences, {} tokens kept, {} removed ({} ms)",
        output.locator,
        corpus.len(),
        stats.tokens_after_filter,
        stats.tokens_removed(),
        stats.duration_ms
    );
    tracing::debug!("{:?}", stats);

    Ok(())
}
