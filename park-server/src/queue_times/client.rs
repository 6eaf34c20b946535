//! queue-times.com HTTP client.

use std::time::Duration;

use super::error::FetchError;
use super::feed::ParkFeed;
use super::types::ParkResponse;

/// Default base URL for the queue-times API.
const DEFAULT_BASE_URL: &str = "https://queue-times.com";

/// Default request timeout. Keeps a slow upstream from stalling page loads.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Maximum body length kept in a [`FetchError::Malformed`].
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the queue-times client.
#[derive(Debug, Clone)]
pub struct QueueTimesConfig {
    /// Base URL for the API (defaults to production queue-times.com)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl QueueTimesConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for QueueTimesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// queue-times.com API client.
///
/// No authentication; the endpoint is public.
#[derive(Debug, Clone)]
pub struct QueueTimesClient {
    http: reqwest::Client,
    base_url: String,
}

impl QueueTimesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: QueueTimesConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the queue times document for a park.
    pub fn park_url(&self, park_id: u32) -> String {
        format!("{}/parks/{}/queue_times.json", self.base_url, park_id)
    }

    /// Fetch and parse the queue times for a park.
    pub async fn get_queue_times(&self, park_id: u32) -> Result<ParkResponse, FetchError> {
        let url = self.park_url(park_id);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| FetchError::Malformed {
            message: e.to_string(),
            body: Some(body.chars().take(MAX_ERROR_BODY).collect()),
        })
    }
}

impl ParkFeed for QueueTimesClient {
    async fn fetch_park(&self, park_id: u32) -> Result<ParkResponse, FetchError> {
        self.get_queue_times(park_id).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::cache::{CacheConfig, CachedParkFeed};

    /// Serve a single canned HTTP reply on a local port, after `delay`.
    /// Returns the base URL to point the client at.
    async fn serve_once(status: &'static str, body: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(delay).await;
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    fn local_client(base_url: String, timeout: Duration) -> QueueTimesClient {
        let config = QueueTimesConfig::default()
            .with_base_url(base_url)
            .with_timeout(timeout);
        QueueTimesClient::new(config).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = QueueTimesConfig::default()
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_defaults() {
        let config = QueueTimesConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn park_url_for_parc_asterix() {
        let client = QueueTimesClient::new(QueueTimesConfig::default()).unwrap();
        assert_eq!(
            client.park_url(9),
            "https://queue-times.com/parks/9/queue_times.json"
        );
    }

    #[test]
    fn park_url_ignores_trailing_slash() {
        let config = QueueTimesConfig::default().with_base_url("http://localhost:8080/");
        let client = QueueTimesClient::new(config).unwrap();
        assert_eq!(
            client.park_url(9),
            "http://localhost:8080/parks/9/queue_times.json"
        );
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let url = serve_once("200 OK", "not json", Duration::ZERO).await;
        let client = local_client(url, Duration::from_secs(3));

        let err = client.get_queue_times(9).await.unwrap_err();
        match err {
            FetchError::Malformed { body, .. } => {
                assert_eq!(body.as_deref(), Some("not json"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let url = serve_once("503 Service Unavailable", "down", Duration::ZERO).await;
        let client = local_client(url, Duration::from_secs(3));

        let err = client.get_queue_times(9).await.unwrap_err();
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_reply_times_out() {
        let url = serve_once("200 OK", "{}", Duration::from_secs(2)).await;
        let client = local_client(url, Duration::from_millis(200));

        let err = client.get_queue_times(9).await.unwrap_err();
        assert!(matches!(err, FetchError::Unreachable(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn valid_body_is_parsed() {
        let body = r#"{"rides": [{"name": "Goudurix", "wait_time": 15, "is_open": true}]}"#;
        let url = serve_once("200 OK", body, Duration::ZERO).await;
        let client = local_client(url, Duration::from_secs(3));

        let park = client.fetch_park(9).await.unwrap();
        assert_eq!(park.rides.len(), 1);
        assert_eq!(park.rides[0].name, "Goudurix");
    }

    #[tokio::test]
    async fn cached_client_falls_back_to_empty_park() {
        let url = serve_once("503 Service Unavailable", "down", Duration::ZERO).await;
        let client = local_client(url, Duration::from_secs(3));
        let cached = CachedParkFeed::new(client, &CacheConfig::default());

        let park = cached.fetch_or_empty().await;
        assert_eq!(*park, ParkResponse::empty());
    }
}
