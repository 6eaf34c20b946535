//! Web layer for the wait-time board.
//!
//! Serves the rendered board at `/` and the same data as JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
