//! Document retrieval.
//!
//! A [`Fetcher`] turns a locator into a [`Document`] with exactly one
//! retrieval attempt. Retry policy belongs to the caller.

mod client;
mod config;
mod file;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub use client::HttpFetcher;
pub use config::FetchConfig;
pub use file::FileFetcher;

#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("invalid locator: {0}")]
    InvalidLocator(String),
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),
    #[error("remote returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("I/O failed")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to fetch {locator}")]
pub struct FetchError {
    pub locator: String,
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(locator: impl Into<String>, cause: impl Into<FetchCause>) -> Self {
        Self {
            locator: locator.into(),
            cause: cause.into(),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Raw text of a retrieved document together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub locator: String,
    pub text: String,
    pub content_type: Option<String>,
}

impl Document {
    #[must_use]
    pub fn new(locator: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            text: text.into(),
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> FetchResult<Document>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Http,
    File,
}

fn route(locator: &str) -> Result<Route, FetchCause> {
    match Url::parse(locator) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(Route::Http),
            "file" => Ok(Route::File),
            other => Err(FetchCause::UnsupportedScheme(other.to_string())),
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Route::File),
        Err(e) => Err(FetchCause::InvalidLocator(e.to_string())),
    }
}

/// Default fetcher: web locators go over HTTP, `file://` URLs and bare paths
/// are read from disk.
pub struct LocatorFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl LocatorFetcher {
    pub fn new(config: FetchConfig) -> crate::Result<Self> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
            file: FileFetcher::new(),
        })
    }
}

#[async_trait::async_trait]
impl Fetcher for LocatorFetcher {
    async fn fetch(&self, locator: &str) -> FetchResult<Document> {
        match route(locator).map_err(|cause| FetchError::new(locator, cause))? {
            Route::Http => self.http.fetch(locator).await,
            Route::File => self.file.fetch(locator).await,
        }
    }
}
