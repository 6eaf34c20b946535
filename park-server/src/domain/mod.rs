//! Domain types for the park wait-time board.

mod category;
mod freshness;
mod ride;

pub use category::{Category, CategoryIndex, CategoryIndexBuilder, parc_asterix};
pub use freshness::{Freshness, LastUpdated, TimestampError, parse_timestamp};
pub use ride::Ride;
