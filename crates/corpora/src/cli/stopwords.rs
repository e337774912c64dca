use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::{load_config, StopwordArgs};

#[derive(Args, Debug)]
pub struct StopwordsArgs {
    #[command(flatten)]
    pub stopwords: StopwordArgs,
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &StopwordsArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.stopwords.apply(&mut config.stopwords);

    let set = config
        .stopwords
        .build()
        .context("building stopword set")?;

    let words: Vec<&str> = set.sorted().into_iter().filter(|w| !w.is_empty()).collect();
    for word in &words {
        println!("{word}");
    }

    if set.contains("") {
        eprintln!("{} stopwords plus the empty token", words.len());
    } else {
        eprintln!("{} stopwords", words.len());
    }

    Ok(())
}
