//! View state for the statistics region
//!
//! `StatsView` is the set of view-element handles the renderer writes into:
//! one progress ring per tier, the summary cards, and the region's visibility.
//! Drawing reads this state; nothing else is retained between projections.

use super::types::{StatsRecord, Tier, progress_percent};

/// Fixed message shown when a lookup fails
pub const NO_DATA_MESSAGE: &str = "No data found";

/// Progress indicator for one tier
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRing {
    pub tier: Tier,
    /// Proportion parameter in percent, written through unchanged (may be non-finite)
    pub percent: f64,
    pub label: String,
}

impl ProgressRing {
    fn new(tier: Tier) -> Self {
        Self {
            tier,
            percent: 0.0,
            label: String::new(),
        }
    }

    /// Ratio for drawing, clamped to `[0, 1]` with non-finite values drawn empty
    pub fn display_ratio(&self) -> f64 {
        if self.percent.is_finite() {
            (self.percent / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// One summary card: a heading and a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: u64,
}

/// What the statistics region currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsContent {
    /// Nothing searched yet
    #[default]
    Empty,
    Stats,
    NoData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub rings: [ProgressRing; 3],
    pub cards: Vec<SummaryCard>,
    pub content: StatsContent,
    pub visible: bool,
}

impl Default for StatsView {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsView {
    pub fn new() -> Self {
        Self {
            rings: Tier::ALL.map(ProgressRing::new),
            cards: Vec::new(),
            content: StatsContent::Empty,
            visible: true,
        }
    }

    pub fn ring(&self, tier: Tier) -> &ProgressRing {
        &self.rings[tier as usize]
    }

    /// Project a statistics record onto the rings and cards
    ///
    /// Cards are replaced wholesale, so projecting the same record twice
    /// leaves the view identical to projecting it once.
    pub fn project_success(&mut self, record: &StatsRecord) {
        for ring in self.rings.iter_mut() {
            let count = record.tier(ring.tier);
            ring.percent = progress_percent(count);
            ring.label = count.to_string();
        }

        self.cards = vec![
            SummaryCard {
                label: "Total Submissions",
                value: record.total_solved,
            },
            SummaryCard {
                label: "Total Easy Submissions",
                value: record.easy.solved,
            },
            SummaryCard {
                label: "Total Medium Submissions",
                value: record.medium.solved,
            },
            SummaryCard {
                label: "Total Hard Submissions",
                value: record.hard.solved,
            },
        ];
        self.content = StatsContent::Stats;
    }

    /// Replace the region's content with the fixed no-data message
    pub fn project_failure(&mut self) {
        self.content = StatsContent::NoData;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}

#[cfg(test)]
#[path = "stats_view_tests.rs"]
mod stats_view_tests;
