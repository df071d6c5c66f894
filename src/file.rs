//! Repository file model.
//!
//! Represents one file fetched from the contents endpoint: metadata plus
//! base64-encoded content, with text accessors and the PUT payload builder.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A repository file as returned by `GET /repos/{repo}/contents/{path}`.
///
/// `content` holds base64 text; GitHub wraps it with newlines, which the
/// decoder tolerates. After [`RepoFile::set_text`] the content is unwrapped
/// base64. The `sha` identifies the blob version the file was fetched at and
/// rides along on the commit so the API can detect concurrent modification;
/// a committed file's local copy is stale (its sha no longer matches remote).
#[derive(Debug, Clone, Deserialize)]
pub struct RepoFile {
    /// Entry type, e.g. "file"
    #[serde(rename = "type")]
    pub kind: String,
    /// Declared content encoding; only "base64" is supported
    pub encoding: String,
    pub size: u64,
    pub name: String,
    pub path: String,
    pub content: String,
    pub sha: String,
    pub url: String,
}

/// Body for `PUT /repos/{repo}/contents/{path}`.
#[derive(Debug, Clone, Serialize)]
pub struct CommitPayload {
    pub message: String,
    /// Base64 of the file's current text
    pub content: String,
    pub sha: String,
    pub branch: String,
}

impl RepoFile {
    /// Decode `content` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encoding` when the declared encoding is not "base64",
    /// the content is not valid base64, or the bytes are not valid UTF-8.
    pub fn text(&self) -> Result<String, Error> {
        if self.encoding != "base64" {
            return Err(Error::Encoding(format!(
                "unsupported content encoding: {:?}",
                self.encoding
            )));
        }

        // GitHub line-wraps the base64 payload
        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = BASE64
            .decode(compact.as_bytes())
            .map_err(|e| Error::Encoding(format!("invalid base64 content: {e}")))?;

        String::from_utf8(bytes).map_err(|e| Error::Encoding(format!("content is not UTF-8: {e}")))
    }

    /// Replace the file's text, re-encoding `content` in place.
    ///
    /// Pure in-memory mutation; the remote file is unchanged until the
    /// payload is committed.
    pub fn set_text(&mut self, text: &str) {
        self.content = BASE64.encode(text.as_bytes());
    }

    /// Build the commit body for the contents endpoint.
    ///
    /// Always serializes the *current decoded text*, re-encoded as unwrapped
    /// base64, so the payload is canonical regardless of how the fetched
    /// content was wrapped.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encoding` if the current content cannot be decoded.
    pub fn commit_payload(&self, message: &str, branch: &str) -> Result<CommitPayload, Error> {
        let text = self.text()?;
        Ok(CommitPayload {
            message: message.to_string(),
            content: BASE64.encode(text.as_bytes()),
            sha: self.sha.clone(),
            branch: branch.to_string(),
        })
    }
}
