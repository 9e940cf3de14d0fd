//! leetstat library - LeetCode stats dashboard for the terminal
//!
//! This library exposes the core functionality of leetstat for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod notification;
pub mod search;
pub mod stats;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod validation;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use stats::StatsRecord;
