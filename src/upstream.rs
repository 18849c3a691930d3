//! Outbound HTTP access shared by the responders.

use reqwest::StatusCode;
use thiserror::Error;
use tokio::time::{timeout, Duration};

/// Errors from a single outbound GET. The display text is what gets spoken
/// back to the caller, so keep it readable.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Clone)]
pub struct Upstream {
    client: reqwest::Client,
    timeout: Duration,
}

impl Upstream {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// GETs `url` with the given query pairs and returns the body as text.
    /// The whole exchange, body included, is bounded by the configured timeout.
    pub async fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<String, UpstreamError> {
        let exchange = async {
            let response = self
                .client
                .get(url)
                .query(query)
                .send()
                .await
                .map_err(|source| UpstreamError::Http {
                    url: url.to_string(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status {
                    url: url.to_string(),
                    status,
                });
            }

            response.text().await.map_err(|source| UpstreamError::Body {
                url: url.to_string(),
                source,
            })
        };

        timeout(self.timeout, exchange)
            .await
            .map_err(|_| UpstreamError::Timeout {
                url: url.to_string(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_is_speakable() {
        let err = UpstreamError::NotConfigured("QUOTES_URL");
        assert_eq!(err.to_string(), "QUOTES_URL is not configured");

        let err = UpstreamError::Status {
            url: "http://feed.local/now.json".to_string(),
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(
            err.to_string(),
            "http://feed.local/now.json answered with status 502 Bad Gateway"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_an_http_error() {
        let upstream = Upstream::new(Duration::from_secs(5));
        let err = upstream
            .get_text("http://127.0.0.1:1/now.json", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Http { .. }), "got {err:?}");
    }
}
