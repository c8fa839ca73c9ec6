//! Event feed loading
//!
//! The feed is a flat JSON list of `Event` records, fetched over HTTP or
//! read from disk. Exactly one request per load, with an explicit timeout so
//! a hung server cannot leave the caller in a perpetual loading state.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::FeedError;
use crate::types::{Event, ReferenceDoc};

/// Somewhere the event feed can be loaded from
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch and parse the full event list
    async fn fetch(&self) -> Result<Vec<Event>, FeedError>;

    /// Human-readable description for logs and error messages
    fn describe(&self) -> String;
}

/// Feed served over HTTP(S)
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl EventSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Event>, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let timeout_secs = self.timeout.as_secs();
        let response = client.get(self.url.as_str()).send().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout(timeout_secs)
            } else {
                FeedError::Http(e)
            }
        })?;

        let body = response.error_for_status()?.text().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout(timeout_secs)
            } else {
                FeedError::Http(e)
            }
        })?;

        let events: Vec<Event> = serde_json::from_str(&body)?;
        debug!(count = events.len(), url = %self.url, "feed fetched");
        Ok(events)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Feed read from a local file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Event>, FeedError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let events: Vec<Event> = serde_json::from_str(&body)?;
        debug!(count = events.len(), path = %self.path.display(), "feed read");
        Ok(events)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a feed spec: URLs go over HTTP, anything else is a path
pub fn source_for(spec: &str, timeout_secs: u64) -> Box<dyn EventSource> {
    if spec.starts_with("http://") || spec.starts_with("https://") {
        Box::new(HttpSource::new(spec, timeout_secs))
    } else {
        Box::new(FileSource::new(spec))
    }
}

/// Load the optional reference document.
///
/// This degrades rather than errors: a missing or malformed file logs a
/// warning and yields an empty document, so reference-driven widgets render
/// empty while the timeline keeps working.
pub fn load_reference(path: &Path) -> ReferenceDoc {
    match std::fs::read_to_string(path) {
        Ok(body) => match serde_json::from_str(&body) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed reference document");
                ReferenceDoc::default()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "reference document unavailable");
            ReferenceDoc::default()
        }
    }
}
