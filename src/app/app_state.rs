use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::fetch::{FetchError, FetchRequest, FetchResponse};
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::search::{SearchControl, SearchOutcome, SearchPhase};
use crate::stats::StatsView;
use crate::validation::validate_username;

/// Application context
///
/// Owns every piece of view state and the channels to the fetch worker.
/// Search transitions happen only through `begin_fetch` and `complete_fetch`.
pub struct App {
    pub input: InputState,
    pub search: SearchControl,
    pub stats: StatsView,
    pub notification: NotificationState,
    pub should_quit: bool,
    pub needs_render: bool,
    request_tx: Option<Sender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            search: SearchControl::new(),
            stats: StatsView::new(),
            notification: NotificationState::new(),
            should_quit: false,
            needs_render: true,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Connect the app to a running fetch worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Redraw when dirty, or while a toast may expire on its own
    ///
    /// An open alert never expires, so it only redraws on input.
    pub fn should_render(&self) -> bool {
        self.needs_render
            || (self.notification.current().is_some() && !self.notification.is_blocking())
    }

    /// Handle activation of the search control
    ///
    /// Ignored while the control is disabled. Validation failures raise a
    /// blocking alert and never reach the network.
    pub fn submit(&mut self) {
        if !self.search.is_enabled() {
            return;
        }

        let username = self.input.value().to_string();

        #[cfg(debug_assertions)]
        log::debug!("Username: {}", username);

        match validate_username(&username) {
            Ok(()) => self.begin_fetch(&username),
            Err(e) => self.notification.show_alert(&e.to_string()),
        }
        self.mark_dirty();
    }

    /// Start a lookup: relabel and disable the control, hide the stats region,
    /// and hand the request to the worker
    ///
    /// Does not consult `is_enabled`; callers that bypass `submit` can overlap
    /// requests.
    pub fn begin_fetch(&mut self, username: &str) {
        let request_id = self.search.begin();
        self.stats.hide();
        self.mark_dirty();

        let request = FetchRequest {
            request_id,
            username: username.to_string(),
        };

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };

        if !sent {
            log::error!("Fetch worker unavailable for request {}", request_id);
            self.complete_fetch(FetchResponse {
                request_id,
                username: username.to_string(),
                result: Err(FetchError::Unexpected(
                    "Fetch worker not running".to_string(),
                )),
            });
        }
    }

    /// Apply a finished lookup and restore the controls
    ///
    /// Every outcome ends in the same cleanup: "Search" label, enabled
    /// control, empty input, visible stats region.
    pub fn complete_fetch(&mut self, response: FetchResponse) {
        let FetchResponse {
            request_id,
            username,
            result,
        } = response;

        let outcome = match result {
            Ok(record) => {
                self.stats.project_success(&record);
                SearchOutcome::Success { username, record }
            }
            Err(error) => {
                log::debug!("Request {} for {} failed: {}", request_id, username, error);
                self.stats.project_failure();
                SearchOutcome::Failure { username, error }
            }
        };

        self.finish_search(outcome);
    }

    fn finish_search(&mut self, outcome: SearchOutcome) {
        self.search.finish(outcome);
        self.input.clear();
        self.stats.show();
        self.mark_dirty();
    }

    /// Drain finished lookups from the worker (non-blocking)
    ///
    /// Returns true if anything changed.
    pub fn poll_fetch_response(&mut self) -> bool {
        let Some(rx) = &self.response_rx else {
            return false;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;

        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let had_responses = !responses.is_empty();
        for response in responses {
            self.complete_fetch(response);
        }

        if disconnected {
            self.response_rx = None;
            self.request_tx = None;

            if let SearchPhase::Searching { request_id } = self.search.phase() {
                log::error!("Fetch worker disconnected during request {}", request_id);
                self.complete_fetch(FetchResponse {
                    request_id,
                    username: String::new(),
                    result: Err(FetchError::Unexpected(
                        "Fetch worker disconnected unexpectedly".to_string(),
                    )),
                });
            }
        }

        had_responses || disconnected
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
