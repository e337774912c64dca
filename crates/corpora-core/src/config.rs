use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fetch::FetchConfig;
use crate::ingest::{
    BoundaryMarkers, LanguageStopwords, StaticStopwords, StopwordSet, GUTENBERG_END,
    GUTENBERG_START,
};

/// Start/end marker patterns delimiting the body of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    pub start: String,
    pub end: String,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            start: GUTENBERG_START.to_string(),
            end: GUTENBERG_END.to_string(),
        }
    }
}

impl BoundaryConfig {
    pub fn markers(&self) -> Result<BoundaryMarkers> {
        BoundaryMarkers::new(&self.start, &self.end)
    }
}

/// Which tokens the stopword filter drops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordConfig {
    /// Bundled list to start from (ISO code or name); `None` disables it
    pub language: Option<String>,
    /// Additional words to exclude
    pub extra: Vec<String>,
    /// Whether the empty token is excluded
    pub exclude_empty: bool,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            language: Some("en".to_string()),
            extra: Vec::new(),
            exclude_empty: true,
        }
    }
}

impl StopwordConfig {
    pub fn build(&self) -> Result<StopwordSet> {
        let set = match &self.language {
            Some(language) => StopwordSet::from_source(&LanguageStopwords::new(language)?),
            None => StopwordSet::from_source(&StaticStopwords::default()),
        };
        let mut set = set.with_words(self.extra.iter().cloned());

        if !self.exclude_empty {
            set = set.without("");
        }
        Ok(set)
    }
}

/// Everything needed to assemble a corpus pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub fetch: FetchConfig,
    pub boundaries: BoundaryConfig,
    pub stopwords: StopwordConfig,
}

impl PipelineConfig {
    /// `corpora/config.json` under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("corpora").join("config.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load `path` if given, else the default path if it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using config {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn with_env(mut self) -> Self {
        self.fetch.apply_env();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();

        assert_eq!(config.boundaries.start, GUTENBERG_START);
        assert_eq!(config.stopwords.language.as_deref(), Some("en"));
        assert!(config.stopwords.exclude_empty);
    }

    #[test]
    fn test_default_stopwords_build() {
        let set = StopwordConfig::default().build().unwrap();

        assert!(set.contains(""));
        assert!(set.contains("the"));
    }

    #[test]
    fn test_stopwords_without_language() {
        let config = StopwordConfig {
            language: None,
            extra: vec!["Of".into(), "the".into()],
            exclude_empty: false,
        };

        let set = config.build().unwrap();

        assert_eq!(set.sorted(), vec!["of", "the"]);
    }

    #[test]
    fn test_unknown_language_fails() {
        let config = StopwordConfig {
            language: Some("xx".into()),
            ..Default::default()
        };

        assert!(matches!(config.build(), Err(Error::UnknownLanguage(_))));
    }

    #[test]
    fn test_invalid_boundary_pattern() {
        let config = BoundaryConfig {
            start: "[".into(),
            end: "END".into(),
        };

        assert!(matches!(config.markers(), Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"boundaries": {"start": "BEGIN"}, "stopwords": {"language": null}}"#,
        )
        .unwrap();

        let config = PipelineConfig::load(&path).unwrap();

        assert_eq!(config.boundaries.start, "BEGIN");
        assert_eq!(config.boundaries.end, GUTENBERG_END);
        assert_eq!(config.stopwords.language, None);
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(
            PipelineConfig::load(&path),
            Err(Error::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(PipelineConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_discover_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"fetch": {"connect_timeout_seconds": 3}}"#).unwrap();

        let config = PipelineConfig::discover(Some(&path)).unwrap();

        assert_eq!(config.fetch.connect_timeout_seconds, 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PipelineConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
