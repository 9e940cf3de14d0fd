//! Stats fetching
//!
//! Builds the request URL, performs one GET against the stats API, and
//! interprets the response envelope into a `StatsRecord` or a `FetchError`.
//! Requests run on a background worker so the UI never blocks on the network.

mod client;
mod envelope;
pub mod worker;

use thiserror::Error;

pub use client::{DEFAULT_BASE_URL, StatsClient, endpoint_url};
pub use envelope::{RETRIEVED_MESSAGE, interpret_response};
pub use worker::{FetchRequest, FetchResponse};

/// Errors that can occur while fetching statistics
///
/// All of these end in the same "No data found" view; the variants exist
/// for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-success HTTP status
    #[error("Unable to fetch user: {username} details")]
    Transport { username: String },

    /// Well-formed response whose message is not "retrieved"
    #[error("Username not found")]
    NotFound,

    /// Network failure, malformed JSON, or a schema violation
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
