//! Askama templates for the web frontend.

use askama::Template;

use crate::board::{CategorySection, ParkBoard};
use crate::domain::{Freshness, Ride};

/// Wait-time board page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub sections: Vec<SectionView>,
    pub last_updated: String,
    pub freshness: String,
    /// CSS class for the freshness badge.
    pub freshness_class: &'static str,
}

impl IndexTemplate {
    /// Create from a board.
    pub fn from_board(board: &ParkBoard) -> Self {
        Self {
            sections: board.sections.iter().map(SectionView::from_section).collect(),
            last_updated: board.last_updated.clone(),
            freshness: board.freshness.to_string(),
            freshness_class: freshness_class(&board.freshness),
        }
    }
}

/// Category section view model.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub title: &'static str,
    pub slug: &'static str,
    pub rides: Vec<RideView>,
}

impl SectionView {
    /// Create from a board section.
    pub fn from_section(section: &CategorySection) -> Self {
        Self {
            title: section.category.label(),
            slug: section.category.slug(),
            rides: section.rides.iter().map(RideView::from_ride).collect(),
        }
    }
}

/// Ride view model.
#[derive(Debug, Clone)]
pub struct RideView {
    pub name: String,
    /// "25 min" when open, "Fermé" when closed.
    pub wait_label: String,
    pub status_class: &'static str,
}

impl RideView {
    /// Create from a domain ride.
    pub fn from_ride(ride: &Ride) -> Self {
        let (wait_label, status_class) = if ride.is_open {
            (format!("{} min", ride.wait_time), "open")
        } else {
            ("Fermé".to_string(), "closed")
        };

        Self {
            name: ride.name.clone(),
            wait_label,
            status_class,
        }
    }
}

fn freshness_class(freshness: &Freshness) -> &'static str {
    match freshness {
        Freshness::Recent { .. } => "fresh",
        Freshness::Minutes { .. } | Freshness::Hours { .. } => "aging",
        Freshness::Stale => "stale",
        Freshness::UnknownDate | Freshness::Unknown => "unknown",
    }
}
