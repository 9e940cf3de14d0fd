//! Shared test utilities for leetstat
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::{self, Receiver, Sender};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::fetch::{FetchRequest, FetchResponse, StatsClient};
    use crate::stats::{StatsRecord, TierCount};

    /// A real "retrieved" response from the stats API
    pub const SAMPLE_STATS_JSON: &str = r#"{
        "status": "success",
        "message": "retrieved",
        "totalSolved": 323,
        "totalQuestions": 3279,
        "easySolved": 61,
        "totalEasy": 823,
        "mediumSolved": 220,
        "totalMedium": 1715,
        "hardSolved": 42,
        "totalHard": 741,
        "acceptanceRate": 62.92,
        "ranking": 249763,
        "contributionPoints": 576,
        "reputation": 0
    }"#;

    /// The record `SAMPLE_STATS_JSON` interprets to
    pub fn sample_record() -> StatsRecord {
        StatsRecord {
            easy: TierCount::new(61, 823),
            medium: TierCount::new(220, 1715),
            hard: TierCount::new(42, 741),
            total_solved: 323,
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Send each character of `text` as a key press
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// App wired to test-held channel ends instead of a worker thread
    ///
    /// Returns the app, the receiver for requests it sends, and the sender
    /// for feeding it responses.
    pub fn app_with_channels() -> (App, Receiver<FetchRequest>, Sender<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = App::new();
        app.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Helper to run async tests with a tokio runtime
    pub fn run_async<F: std::future::Future>(f: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(f)
    }

    /// Client for a loopback base URL that ignores any proxy in the environment
    pub fn local_client(base_url: &str) -> StatsClient {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to build HTTP client");
        StatsClient::with_client(client, base_url)
    }

    /// Serve a single canned HTTP response on a loopback port
    ///
    /// Returns the base URL and a receiver yielding the request line that
    /// was received.
    pub fn serve_once(status: u16, body: &'static str) -> (String, Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };

            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            let _ = reader.read_line(&mut request_line);

            // Drain headers up to the blank line
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                if line == "\r\n" || line == "\n" {
                    break;
                }
                line.clear();
            }

            let response = format!(
                "HTTP/1.1 {} STATUS\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            let _ = tx.send(request_line.trim_end().to_string());
        });

        (format!("http://{}", addr), rx)
    }
}
