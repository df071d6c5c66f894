//! Webhook event model.
//!
//! Parses the subset of the GitHub webhook event schema this tool cares
//! about: the repository, the sender, and an optional release payload.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Error;

/// A parsed webhook event.
///
/// Constructed once from the event JSON document and never mutated. The
/// `release` field is present iff the source payload contained a release
/// object, which is how release events are detected.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub repository: Repository,
    pub sender: Sender,
    #[serde(default)]
    pub release: Option<Release>,
}

/// The repository the event fired on.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub description: Option<String>,
    pub fork: bool,
    /// Canonical API URL, e.g. `https://api.github.com/repos/Codertocat/Hello-World`
    pub url: String,
    pub default_branch: String,
}

/// The account that triggered the event.
#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    /// Account type, e.g. "User"
    #[serde(rename = "type")]
    pub kind: String,
    pub login: String,
    pub id: u64,
    pub url: String,
}

/// Release payload, present on `release` events only.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub url: String,
    pub html_url: String,
    pub id: u64,
    pub node_id: String,
    pub tag_name: String,
    pub target_commitish: String,
    pub created_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
}

impl Event {
    /// Parse an event from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedPayload` when the document is not valid JSON
    /// or when `repository`/`sender` are missing or mistyped. A missing
    /// `release` is not an error.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let event = serde_json::from_str(text)?;
        Ok(event)
    }

    /// Read and parse an event file (e.g. `$GITHUB_EVENT_PATH`).
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, otherwise as
    /// [`Event::parse`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// True iff the payload carried a release object.
    #[must_use]
    pub fn is_release(&self) -> bool {
        self.release.is_some()
    }

    /// The repository's API URL, used as the base for all subsequent calls.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.repository.url
    }
}
