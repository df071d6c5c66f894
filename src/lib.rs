//! release-pr
//!
//! A minimal GitHub automation helper: parse a webhook event payload, fetch
//! a repository file, edit its text, commit the change on a new branch, and
//! open a pull request.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use release_pr::{ChangeWorkflow, Event, HttpTransport, RepoClient};
//!
//! # fn main() -> Result<(), release_pr::Error> {
//! let event = Event::from_path("event.json")?;
//! let release = event.release.as_ref().ok_or(release_pr::Error::NotRelease)?;
//!
//! let transport = HttpTransport::new("https://api.github.com", "<token>", None)?;
//! let client = RepoClient::new(transport, "owner/repo", &format!("update-{}", release.tag_name));
//!
//! let workflow = ChangeWorkflow::begin(client)?;
//! let mut file = workflow.client().fetch_file("bin/runtime/versions")?;
//! let updated = file.text()?.replace("foo.bar", "def.bar");
//! file.set_text(&updated);
//! workflow.client().commit_file(&file, "Update image to latest version")?;
//! workflow.finish("Update image to latest version", "Updates to the released version")?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod file;
pub mod transport;
pub mod types;
pub mod workflow;

// Re-exports
pub use client::{RepoClient, DEFAULT_BASE_BRANCH};
pub use config::Config;
pub use error::{ApiError, Error};
pub use event::{Event, Release, Repository, Sender};
pub use file::{CommitPayload, RepoFile};
pub use transport::{HttpTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use types::{CommitInfo, CommitResult, GitObject, GitRef, PullRequest};
pub use workflow::ChangeWorkflow;
