pub mod build;
pub mod stopwords;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use corpora_core::{PipelineConfig, StopwordConfig};

#[derive(Parser)]
#[command(
    name = "corpora",
    about = "Turn public-domain texts into tokenized corpora for word embeddings",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a document and print its filtered corpus as JSON
    Build(build::BuildArgs),
    /// Print the effective stopword list
    Stopwords(stopwords::StopwordsArgs),
}

#[derive(Args, Debug, Default)]
pub struct StopwordArgs {
    /// Bundled stopword list (ISO code or language name)
    #[arg(short, long)]
    pub language: Option<String>,
    /// Extra word to exclude (repeatable)
    #[arg(long = "stopword")]
    pub extra: Vec<String>,
    /// Drop only the empty token and any --stopword words
    #[arg(long, conflicts_with = "language")]
    pub no_stopwords: bool,
}

impl StopwordArgs {
    pub fn apply(&self, config: &mut StopwordConfig) {
        if self.no_stopwords {
            config.language = None;
        } else if let Some(ref language) = self.language {
            config.language = Some(language.clone());
        }
        config.extra.extend(self.extra.iter().cloned());
    }
}

/// Config file (explicit or discovered) with environment overrides applied.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let config = PipelineConfig::discover(path).with_context(|| match path {
        Some(p) => format!("loading config {}", p.display()),
        None => "loading default config".to_string(),
    })?;
    Ok(config.with_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_stopwords_clears_language() {
        let mut config = StopwordConfig::default();
        let args = StopwordArgs {
            no_stopwords: true,
            extra: vec!["gutenberg".into()],
            ..Default::default()
        };

        args.apply(&mut config);

        assert_eq!(config.language, None);
        assert_eq!(config.extra, vec!["gutenberg"]);
    }

    #[test]
    fn test_language_override() {
        let mut config = StopwordConfig::default();
        let args = StopwordArgs {
            language: Some("de".into()),
            ..Default::default()
        };

        args.apply(&mut config);

        assert_eq!(config.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::try_parse_from([
            "corpora",
            "build",
            "book.txt",
            "--stopword",
            "of",
            "--stopword",
            "the",
            "--compact",
        ])
        .unwrap();

        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.locator, "book.txt");
                assert_eq!(args.stopwords.extra, vec!["of", "the"]);
                assert!(args.compact);
            }
            Commands::Stopwords(_) => panic!("expected build"),
        }
    }

    #[test]
    fn test_cli_rejects_language_with_no_stopwords() {
        assert!(Cli::try_parse_from([
            "corpora",
            "stopwords",
            "--language",
            "en",
            "--no-stopwords"
        ])
        .is_err());
    }
}
