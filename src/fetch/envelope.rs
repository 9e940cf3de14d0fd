//! Response envelope from the stats API
//!
//! The API answers with a flat JSON object. Only `message` and the per-tier
//! counts are consumed; ranking, reputation and the rest are ignored.

use serde::Deserialize;

use super::FetchError;
use crate::stats::{StatsRecord, TierCount};

/// Value of `message` on a successful lookup
pub const RETRIEVED_MESSAGE: &str = "retrieved";

/// Counts required to build a `StatsRecord`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsEnvelope {
    total_solved: u64,
    easy_solved: u64,
    total_easy: u64,
    medium_solved: u64,
    total_medium: u64,
    hard_solved: u64,
    total_hard: u64,
}

impl From<StatsEnvelope> for StatsRecord {
    fn from(env: StatsEnvelope) -> Self {
        StatsRecord {
            easy: TierCount::new(env.easy_solved, env.total_easy),
            medium: TierCount::new(env.medium_solved, env.total_medium),
            hard: TierCount::new(env.hard_solved, env.total_hard),
            total_solved: env.total_solved,
        }
    }
}

/// Interpret an HTTP response from the stats API
///
/// Checks, in order: transport status, JSON syntax, the `message` field, and
/// finally that every consumed count is a non-negative integer.
pub fn interpret_response(username: &str, status: u16, body: &str) -> Result<StatsRecord, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Transport {
            username: username.to_string(),
        });
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Unexpected(format!("Invalid JSON response: {}", e)))?;

    if value.get("message").and_then(|m| m.as_str()) != Some(RETRIEVED_MESSAGE) {
        return Err(FetchError::NotFound);
    }

    #[cfg(debug_assertions)]
    log::debug!(
        "User Details: {}",
        serde_json::to_string_pretty(&value).unwrap_or_default()
    );

    let envelope: StatsEnvelope = serde_json::from_value(value)
        .map_err(|e| FetchError::Unexpected(format!("Malformed stats response: {}", e)))?;

    Ok(envelope.into())
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod envelope_tests;
