//! queue-times.com API response DTOs.
//!
//! These types map directly to the `queue_times.json` payload. Every
//! collection defaults to empty because the API omits keys for parks
//! that do not group rides into lands.

use serde::{Deserialize, Serialize};

/// Response from `GET /parks/{id}/queue_times.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ParkResponse {
    /// Rides not attached to any land.
    #[serde(default)]
    pub rides: Vec<RideDto>,

    /// Themed areas, each with its own rides.
    #[serde(default)]
    pub lands: Vec<LandDto>,

    /// When the park data was last refreshed upstream (ISO 8601).
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl ParkResponse {
    /// The fallback served when upstream cannot be reached.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All rides, top-level first, then each land in upstream order.
    pub fn all_rides(&self) -> impl Iterator<Item = &RideDto> {
        self.rides
            .iter()
            .chain(self.lands.iter().flat_map(|land| land.rides.iter()))
    }

    /// The timestamp to report: the park's own, else the first ride's.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.all_rides()
                    .next()
                    .and_then(|r| r.last_updated.as_deref())
                    .filter(|s| !s.is_empty())
            })
    }
}

/// A themed area of the park.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LandDto {
    #[serde(default)]
    pub id: Option<u32>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub rides: Vec<RideDto>,
}

/// A single ride as reported upstream.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RideDto {
    #[serde(default)]
    pub id: Option<u32>,

    pub name: String,

    /// Current wait in minutes.
    pub wait_time: u32,

    pub is_open: bool,

    /// Per-ride refresh time, used when the park has none.
    #[serde(default)]
    pub last_updated: Option<String>,
}
