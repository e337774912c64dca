use std::path::PathBuf;

use url::Url;

use super::{Document, FetchCause, FetchError, FetchResult, Fetcher};

/// Reads documents from the local filesystem.
///
/// Accepts bare paths and `file://` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl FileFetcher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn resolve(locator: &str) -> Result<PathBuf, FetchCause> {
        if !locator.starts_with("file:") {
            return Ok(PathBuf::from(locator));
        }

        let url = Url::parse(locator).map_err(|e| FetchCause::InvalidLocator(e.to_string()))?;
        url.to_file_path()
            .map_err(|()| FetchCause::InvalidLocator(format!("not a local file URL: {locator}")))
    }
}

#[async_trait::async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, locator: &str) -> FetchResult<Document> {
        let path = Self::resolve(locator).map_err(|cause| FetchError::new(locator, cause))?;

        tracing::debug!("Reading document from {}", path.display());
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::new(locator, e))?;

        Ok(Document::new(locator, text))
    }
}
