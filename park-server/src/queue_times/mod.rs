//! queue-times.com client.
//!
//! queue-times.com publishes live wait times for theme parks as a single
//! public JSON document per park. Parc Astérix is park 9.

mod client;
mod error;
mod feed;
mod mock;
mod types;

pub use client::{QueueTimesClient, QueueTimesConfig};
pub use error::FetchError;
pub use feed::ParkFeed;
pub use mock::{MockFeedError, MockParkFeed};
pub use types::{LandDto, ParkResponse, RideDto};
