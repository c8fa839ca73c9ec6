//! Service bridge for the TUI
//!
//! The feed fetch is async; the event loop is synchronous. A `ServiceHandle`
//! owns a tokio runtime, spawns the fetch there, and hands the outcome back
//! over a crossbeam channel the loop can drain between frames.

use crossbeam_channel::{unbounded, Receiver};

use libchronica::feed;

use crate::error::Result;

/// Outcome of one feed fetch: the events, or a display-ready error message
pub type FeedOutcome = std::result::Result<Vec<libchronica::Event>, String>;

pub struct ServiceHandle {
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create the runtime backing async operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self { runtime })
    }

    /// Spawn a single feed fetch and return the channel its outcome arrives
    /// on. The caller enforces one fetch in flight at a time.
    pub fn fetch_feed(&self, source: String, timeout_secs: u64) -> Receiver<FeedOutcome> {
        let (tx, rx) = unbounded();

        self.runtime.spawn(async move {
            let feed_source = feed::source_for(&source, timeout_secs);
            let outcome = match feed_source.fetch().await {
                Ok(events) => {
                    tracing::info!(count = events.len(), source = %feed_source.describe(), "feed loaded");
                    Ok(events)
                }
                Err(e) => {
                    tracing::warn!(source = %feed_source.describe(), error = %e, "feed load failed");
                    Err(e.to_string())
                }
            };

            // Receiver dropped means the app is shutting down
            let _ = tx.send(outcome);
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_fetch_feed_delivers_events() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "year": 1983}}]"#).unwrap();

        let services = ServiceHandle::new().unwrap();
        let rx = services.fetch_feed(file.path().display().to_string(), 5);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let events = outcome.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
    }

    #[test]
    fn test_fetch_feed_reports_failure_as_message() {
        let services = ServiceHandle::new().unwrap();
        let rx = services.fetch_feed("/nonexistent/timeline-data.json".to_string(), 5);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(outcome.is_err());
    }
}
