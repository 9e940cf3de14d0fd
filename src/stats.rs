//! Stats module for projecting lookup results onto the screen
//!
//! `StatsView` holds what the statistics region shows; `render_stats` draws it.

mod stats_render;
mod stats_view;
mod types;

// Re-export public types
pub use stats_render::render_stats;
pub use stats_view::{NO_DATA_MESSAGE, ProgressRing, StatsContent, StatsView, SummaryCard};
pub use types::{StatsRecord, Tier, TierCount, progress_percent};
