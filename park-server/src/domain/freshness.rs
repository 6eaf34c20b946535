//! Data freshness labels.
//!
//! queue-times reports when its data was last refreshed as an ISO 8601
//! timestamp. This module turns that timestamp into the date shown on the
//! page and a coarse label describing how old the data is.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, Utc};

/// Offset used to display timestamps (Paris, summer time).
const DISPLAY_OFFSET_HOURS: i64 = 2;

/// Date shown when upstream gave no timestamp at all.
const NO_DATE_PLACEHOLDER: &str = "aujourd'hui";

/// Error returned when a timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {raw:?}: {reason}")]
pub struct TimestampError {
    raw: String,
    reason: String,
}

/// Formats tried after RFC 3339, for ISO 8601 variants that it rejects.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Parse an upstream timestamp.
///
/// Accepts RFC 3339 (`2024-01-01T10:00:00.000Z`), a space separator,
/// minute precision (`2024-01-01T10:00Z`) and compact offsets (`+0000`).
/// Timestamps without an offset are rejected since their age cannot be
/// known.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let normalized = match raw.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => raw.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized)
        .or_else(|e| {
            FALLBACK_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
                .ok_or(e)
        })
        .map_err(|e| TimestampError {
            raw: raw.to_string(),
            reason: e.to_string(),
        })
}

/// How old the park data is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Less than 15 minutes old.
    Recent { minutes: i64 },
    /// Less than an hour old.
    Minutes { minutes: i64 },
    /// Less than a day old.
    Hours { hours: i64, minutes: i64 },
    /// A day or more.
    Stale,
    /// A timestamp was given but could not be parsed.
    UnknownDate,
    /// No timestamp was given.
    Unknown,
}

impl Freshness {
    /// Bucket an elapsed duration.
    ///
    /// Whole minutes are truncated; timestamps in the future count as
    /// zero minutes old.
    pub fn from_age(age: Duration) -> Self {
        let minutes = age.num_minutes().max(0);
        if minutes < 15 {
            Freshness::Recent { minutes }
        } else if minutes < 60 {
            Freshness::Minutes { minutes }
        } else if minutes < 24 * 60 {
            Freshness::Hours {
                hours: minutes / 60,
                minutes: minutes % 60,
            }
        } else {
            Freshness::Stale
        }
    }

    /// Whether the age of the data is unknown.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Freshness::UnknownDate | Freshness::Unknown)
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::Recent { minutes } => {
                write!(f, "Données récentes (il y a {minutes} minutes)")
            }
            Freshness::Minutes { minutes } => {
                write!(f, "Données datant d'il y a {minutes} minutes")
            }
            Freshness::Hours { hours, minutes } => {
                write!(f, "Données datant d'il y a {hours}h{minutes:02}")
            }
            Freshness::Stale => f.write_str("Données anciennes (plus de 24h)"),
            Freshness::UnknownDate => f.write_str("Date de mise à jour inconnue"),
            Freshness::Unknown => f.write_str("Fraîcheur des données inconnue"),
        }
    }
}

/// The last-updated line shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastUpdated {
    /// Formatted date, the raw string if unparseable, or a placeholder.
    pub display: String,
    pub freshness: Freshness,
}

impl LastUpdated {
    /// Resolve an optional upstream timestamp against the current time.
    pub fn resolve(raw: Option<&str>, now: DateTime<Utc>) -> Self {
        let Some(raw) = raw else {
            return Self {
                display: NO_DATE_PLACEHOLDER.to_string(),
                freshness: Freshness::Unknown,
            };
        };

        match parse_timestamp(raw) {
            Ok(at) => Self {
                display: format_display(at),
                freshness: Freshness::from_age(now.signed_duration_since(at)),
            },
            Err(e) => {
                tracing::debug!(error = %e, "unparseable last_updated");
                Self {
                    display: raw.to_string(),
                    freshness: Freshness::UnknownDate,
                }
            }
        }
    }
}

/// Format a timestamp as `dd/mm/YYYY à HH:MM:SS` in display time.
fn format_display(at: DateTime<FixedOffset>) -> String {
    let local = at.naive_utc() + Duration::hours(DISPLAY_OFFSET_HOURS);
    local.format("%d/%m/%Y à %H:%M:%S").to_string()
}
