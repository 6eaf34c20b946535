//! Mock park feed for running without network access.
//!
//! Serves a fixed payload, loaded from a JSON file or built in memory,
//! as if it were the live API response.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

use super::error::FetchError;
use super::feed::ParkFeed;
use super::types::ParkResponse;

/// Errors from loading a mock payload.
#[derive(Debug, thiserror::Error)]
pub enum MockFeedError {
    #[error("failed to read mock data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse mock data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
enum Reply {
    Serve(ParkResponse),
    Fail { status: u16 },
}

/// Mock feed that answers every request with the same reply.
///
/// Counts calls so tests can observe whether the cache reached upstream.
#[derive(Debug, Clone)]
pub struct MockParkFeed {
    reply: Arc<RwLock<Reply>>,
    calls: Arc<AtomicUsize>,
}

impl MockParkFeed {
    /// Serve the given payload.
    pub fn new(response: ParkResponse) -> Self {
        Self::with_reply(Reply::Serve(response))
    }

    /// Answer every request with an HTTP error status.
    pub fn failing(status: u16) -> Self {
        Self::with_reply(Reply::Fail { status })
    }

    /// Load the payload from a `queue_times.json` dump on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MockFeedError> {
        let json = std::fs::read_to_string(path)?;
        let response: ParkResponse = serde_json::from_str(&json)?;
        Ok(Self::new(response))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Arc::new(RwLock::new(reply)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace the payload served from now on.
    pub async fn set_response(&self, response: ParkResponse) {
        *self.reply.write().await = Reply::Serve(response);
    }

    /// Number of times the feed has been asked for data.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ParkFeed for MockParkFeed {
    async fn fetch_park(&self, _park_id: u32) -> Result<ParkResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.reply.read().await {
            Reply::Serve(response) => Ok(response.clone()),
            Reply::Fail { status } => Err(FetchError::Status {
                status: *status,
                message: "mock failure".to_string(),
            }),
        }
    }
}
