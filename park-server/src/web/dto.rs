//! Data transfer objects for JSON responses.

use serde::Serialize;

use crate::board::{CategorySection, ParkBoard};
use crate::domain::Ride;

/// The ride board as JSON.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// One entry per category, in page order.
    pub categories: Vec<CategoryResult>,

    /// Formatted last-updated date
    pub last_updated: String,

    /// Freshness label
    pub freshness: String,

    /// Whether the age of the data is unknown
    pub freshness_unknown: bool,
}

impl BoardResponse {
    /// Create from a board.
    pub fn from_board(board: &ParkBoard) -> Self {
        Self {
            categories: board
                .sections
                .iter()
                .map(CategoryResult::from_section)
                .collect(),
            last_updated: board.last_updated.clone(),
            freshness: board.freshness.to_string(),
            freshness_unknown: board.freshness.is_unknown(),
        }
    }
}

/// Rides of one category.
#[derive(Debug, Serialize)]
pub struct CategoryResult {
    /// Short identifier (e.g., "sensations")
    pub id: &'static str,

    /// Display name (e.g., "Sensations fortes")
    pub name: &'static str,

    pub rides: Vec<RideResult>,
}

impl CategoryResult {
    fn from_section(section: &CategorySection) -> Self {
        Self {
            id: section.category.slug(),
            name: section.category.label(),
            rides: section.rides.iter().map(RideResult::from_ride).collect(),
        }
    }
}

/// A single ride.
#[derive(Debug, Serialize)]
pub struct RideResult {
    pub name: String,

    /// Wait in minutes
    pub wait_time: u32,

    pub is_open: bool,
}

impl RideResult {
    fn from_ride(ride: &Ride) -> Self {
        Self {
            name: ride.name.clone(),
            wait_time: ride.wait_time,
            is_open: ride.is_open,
        }
    }
}
