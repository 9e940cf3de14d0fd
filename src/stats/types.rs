//! Statistics record types

use std::fmt;

/// Difficulty tier of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solved and total problem counts for one tier
///
/// `solved <= total` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierCount {
    pub solved: u64,
    pub total: u64,
}

impl TierCount {
    pub fn new(solved: u64, total: u64) -> Self {
        Self { solved, total }
    }
}

impl fmt::Display for TierCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.solved, self.total)
    }
}

/// Normalized statistics consumed by the stats view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsRecord {
    pub easy: TierCount,
    pub medium: TierCount,
    pub hard: TierCount,
    pub total_solved: u64,
}

impl StatsRecord {
    pub fn tier(&self, tier: Tier) -> TierCount {
        match tier {
            Tier::Easy => self.easy,
            Tier::Medium => self.medium,
            Tier::Hard => self.hard,
        }
    }
}

/// Percentage of a tier that has been solved
///
/// Unrounded. A zero total yields a non-finite value which callers store as-is.
pub fn progress_percent(count: TierCount) -> f64 {
    (count.solved as f64 / count.total as f64) * 100.0
}
