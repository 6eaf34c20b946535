//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedParkFeed;
use crate::domain::CategoryIndex;

/// Shared application state.
pub struct AppState<F> {
    /// Cached park feed
    pub feed: Arc<CachedParkFeed<F>>,

    /// Ride name to category lookup, built once at startup
    pub categories: Arc<CategoryIndex>,
}

impl<F> AppState<F> {
    /// Create a new app state.
    pub fn new(feed: CachedParkFeed<F>, categories: CategoryIndex) -> Self {
        Self {
            feed: Arc::new(feed),
            categories: Arc::new(categories),
        }
    }
}

// Manual impl: `F` itself need not be `Clone`.
impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            feed: Arc::clone(&self.feed),
            categories: Arc::clone(&self.categories),
        }
    }
}
