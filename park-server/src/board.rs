//! Ride board: categorize, sort, and date the park data.
//!
//! This is the presentation pipeline behind the index page. It takes the
//! raw upstream payload and produces four ordered ride lists plus the
//! last-updated line. The current time is passed in so the result is
//! deterministic.

use chrono::{DateTime, Utc};

use crate::domain::{Category, CategoryIndex, Freshness, LastUpdated, Ride};
use crate::queue_times::ParkResponse;

/// Rides of one category, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category: Category,
    pub rides: Vec<Ride>,
}

/// Everything the index page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkBoard {
    /// One section per category, in [`Category::ALL`] order.
    pub sections: Vec<CategorySection>,
    /// Formatted last-updated date.
    pub last_updated: String,
    pub freshness: Freshness,
}

impl ParkBoard {
    /// Build the board from an upstream payload.
    pub fn build(park: &ParkResponse, index: &CategoryIndex, now: DateTime<Utc>) -> Self {
        let rides = park
            .all_rides()
            .map(|r| Ride::new(r.name.clone(), r.wait_time, r.is_open));

        let sections = categorize(rides, index)
            .into_iter()
            .zip(Category::ALL)
            .map(|(mut rides, category)| {
                sort_rides(&mut rides);
                CategorySection { category, rides }
            })
            .collect();

        let LastUpdated { display, freshness } = LastUpdated::resolve(park.last_updated(), now);

        Self {
            sections,
            last_updated: display,
            freshness,
        }
    }

    /// Rides in a category.
    pub fn rides(&self, category: Category) -> &[Ride] {
        self.sections
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.rides.as_slice())
            .unwrap_or_default()
    }

    /// Total number of rides on the board.
    pub fn ride_count(&self) -> usize {
        self.sections.iter().map(|s| s.rides.len()).sum()
    }
}

/// Split rides into one list per category, indexed like [`Category::ALL`].
///
/// Upstream order is preserved within each list.
pub fn categorize(
    rides: impl IntoIterator<Item = Ride>,
    index: &CategoryIndex,
) -> [Vec<Ride>; 4] {
    let mut lists: [Vec<Ride>; 4] = Default::default();
    for ride in rides {
        let category = index.classify(&ride.name);
        lists[category as usize].push(ride);
    }
    lists
}

/// Sort rides for display: open before closed, then by ascending wait.
///
/// The sort is stable, so rides with equal keys keep upstream order.
pub fn sort_rides(rides: &mut [Ride]) {
    rides.sort_by_key(Ride::sort_key);
}
