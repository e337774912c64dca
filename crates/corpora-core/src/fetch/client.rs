use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use super::config::FetchConfig;
use super::{Document, FetchCause, FetchError, FetchResult, Fetcher};

/// HTTP(S) fetcher backed by a single reusable `reqwest` client.
///
/// One GET per call. Non-success statuses are errors; nothing is retried.
pub struct HttpFetcher {
    config: FetchConfig,
    inner: Client,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> crate::Result<Self> {
        let inner = build_client(&config)?;
        Ok(Self { config, inner })
    }

    pub const fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn validate_locator(locator: &str) -> Result<Url, FetchCause> {
        let parsed = Url::parse(locator).map_err(|e| FetchCause::InvalidLocator(e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchCause::UnsupportedScheme(parsed.scheme().to_string()));
        }

        if parsed.host_str().is_none() {
            return Err(FetchCause::InvalidLocator("No host in URL".to_string()));
        }

        Ok(parsed)
    }
}

fn build_client(config: &FetchConfig) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .user_agent(config.user_agent())
        .build()
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> FetchResult<Document> {
        let url = Self::validate_locator(locator).map_err(|cause| FetchError::new(locator, cause))?;

        tracing::debug!("GET {}", url);
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(locator, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(locator, FetchCause::Status(status)));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::new(locator, e))?;

        tracing::debug!("Fetched {} bytes from {}", text.len(), locator);
        Ok(Document::new(locator, text).with_content_type(content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned response and returns the URL to request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut buf = vec![0u8; 8192];
            let mut read = 0;
            while read < buf.len() {
                let n = socket.read(&mut buf[read..]).await.unwrap();
                if n == 0 {
                    break;
                }
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/cache/epub/11/pg11.txt")
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(FetchConfig {
            connect_timeout_seconds: 5,
            request_timeout_seconds: 10,
            user_agent: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let url = serve_once("HTTP/1.1 200 OK", "Alice was beginning to get very tired.").await;

        let doc = fetcher().fetch(&url).await.unwrap();

        assert_eq!(doc.locator, url);
        assert_eq!(doc.text, "Alice was beginning to get very tired.");
        assert_eq!(doc.content_type.as_deref(), Some("text/plain; charset=utf-8"));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let url = serve_once("HTTP/1.1 404 Not Found", "missing").await;

        let err = fetcher().fetch(&url).await.unwrap_err();

        assert_eq!(err.locator, url);
        assert!(matches!(
            err.cause,
            FetchCause::Status(code) if code == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{addr}/book.txt");
        let err = fetcher().fetch(&url).await.unwrap_err();

        assert!(matches!(err.cause, FetchCause::Http(_)));
    }

    #[test]
    fn test_validate_rejects_invalid_url() {
        assert!(matches!(
            HttpFetcher::validate_locator("not-a-url"),
            Err(FetchCause::InvalidLocator(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        assert!(matches!(
            HttpFetcher::validate_locator("file:///etc/passwd"),
            Err(FetchCause::UnsupportedScheme(s)) if s == "file"
        ));
    }

    #[test]
    fn test_client_config_access() {
        let config = FetchConfig {
            user_agent: Some("tutorial".into()),
            ..Default::default()
        };
        let fetcher = HttpFetcher::new(config.clone()).unwrap();

        assert_eq!(fetcher.config(), &config);
    }
}
