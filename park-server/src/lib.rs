//! Parc Astérix wait-time server.
//!
//! Fetches live queue times from queue-times.com, groups rides into
//! categories, and serves them as a single HTML page.

pub mod board;
pub mod cache;
pub mod config;
pub mod domain;
pub mod queue_times;
pub mod web;
