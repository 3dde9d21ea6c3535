//! Core types and backend API client for Shorts caption analytics.
//!
//! The backend owns all aggregation (averages, percentages, bucketing,
//! sentiment scoring); this crate models its JSON contract, builds query
//! strings for it, and (behind the `browser` feature) talks to it over
//! the browser fetch API.

pub mod analysis;
pub mod config;
pub mod date_index;
pub mod error;
pub mod filters;
pub mod payload;
pub mod query;
pub mod request_guard;
pub mod shorts;
pub mod snapshot;
pub mod storage;

#[cfg(feature = "browser")]
pub mod client;
