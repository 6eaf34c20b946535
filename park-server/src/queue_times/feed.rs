//! Source abstraction for park data.

use std::future::Future;

use super::error::FetchError;
use super::types::ParkResponse;

/// Something that can produce the current queue times for a park.
///
/// Implemented by [`QueueTimesClient`](super::QueueTimesClient) for the
/// live API and by [`MockParkFeed`](super::MockParkFeed) for offline use.
pub trait ParkFeed: Send + Sync + 'static {
    fn fetch_park(
        &self,
        park_id: u32,
    ) -> impl Future<Output = Result<ParkResponse, FetchError>> + Send;
}
