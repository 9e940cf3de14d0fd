//! Search control state
//!
//! Models the trigger button as an explicit state machine:
//! `Idle -> Searching -> (Success | Failure) -> Idle`. Success and failure are
//! recorded as the last outcome; the control itself always returns to idle.

use crate::fetch::FetchError;
use crate::stats::StatsRecord;

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

/// Whether a lookup is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching { request_id: u64 },
}

/// Result of the most recent lookup
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Success { username: String, record: StatsRecord },
    Failure { username: String, error: FetchError },
}

/// The trigger control
///
/// Disabling is advisory: `begin` does not refuse while already searching,
/// it is up to callers to respect `is_enabled`.
#[derive(Debug, Default)]
pub struct SearchControl {
    phase: SearchPhase,
    next_request_id: u64,
    last_outcome: Option<SearchOutcome>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            SearchPhase::Idle => SEARCH_LABEL,
            SearchPhase::Searching { .. } => SEARCHING_LABEL,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.phase == SearchPhase::Idle
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    /// Enter `Searching` and return the id for the new request
    pub fn begin(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request_id = self.next_request_id;
        self.phase = SearchPhase::Searching { request_id };
        request_id
    }

    /// Record the outcome and return to `Idle`
    pub fn finish(&mut self, outcome: SearchOutcome) {
        self.last_outcome = Some(outcome);
        self.phase = SearchPhase::Idle;
    }

    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let control = SearchControl::new();
        assert_eq!(control.phase(), SearchPhase::Idle);
        assert_eq!(control.label(), "Search");
        assert!(control.is_enabled());
        assert!(control.last_outcome().is_none());
    }

    #[test]
    fn test_begin_disables_and_relabels() {
        let mut control = SearchControl::new();
        let id = control.begin();

        assert_eq!(control.phase(), SearchPhase::Searching { request_id: id });
        assert_eq!(control.label(), "Searching...");
        assert!(!control.is_enabled());
        assert!(control.is_searching());
    }

    #[test]
    fn test_request_ids_increase() {
        let mut control = SearchControl::new();
        let first = control.begin();
        let second = control.begin();
        assert!(second > first);
    }

    #[test]
    fn test_finish_success_returns_to_idle() {
        let mut control = SearchControl::new();
        control.begin();
        control.finish(SearchOutcome::Success {
            username: "alice".to_string(),
            record: StatsRecord::default(),
        });

        assert_eq!(control.phase(), SearchPhase::Idle);
        assert_eq!(control.label(), "Search");
        assert!(control.is_enabled());
        assert!(matches!(
            control.last_outcome(),
            Some(SearchOutcome::Success { .. })
        ));
    }

    #[test]
    fn test_finish_failure_returns_to_idle() {
        let mut control = SearchControl::new();
        control.begin();
        control.finish(SearchOutcome::Failure {
            username: "ghost".to_string(),
            error: FetchError::NotFound,
        });

        assert!(control.is_enabled());
        assert_eq!(
            control.last_outcome(),
            Some(&SearchOutcome::Failure {
                username: "ghost".to_string(),
                error: FetchError::NotFound,
            })
        );
    }

    #[test]
    fn test_machine_is_reentrant() {
        let mut control = SearchControl::new();
        for _ in 0..3 {
            control.begin();
            assert!(!control.is_enabled());
            control.finish(SearchOutcome::Failure {
                username: "x".to_string(),
                error: FetchError::NotFound,
            });
            assert!(control.is_enabled());
        }
    }
}
