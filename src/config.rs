//! Run configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::Error;
use crate::transport::DEFAULT_BASE_URL;

/// Configuration for one automation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the webhook event JSON (`GITHUB_EVENT_PATH`)
    pub event_path: PathBuf,
    /// Personal access token (`GITHUB_TOKEN`)
    pub token: String,
    /// Target repository in owner/name form (`TARGET_REPO`)
    pub repo: String,
    /// Path of the file to edit (`TARGET_FILE`)
    pub file_path: String,
    /// Substring to replace in the file (`REPLACE_FROM`)
    pub replace_from: String,
    /// Replacement text (`REPLACE_TO`)
    pub replace_to: String,
    /// API root (`GITHUB_API_URL`, default <https://api.github.com>)
    pub api_url: String,
    /// Commit message (`COMMIT_MESSAGE`, defaults to "Update <file>")
    pub commit_message: String,
    /// Pull request title (`PR_TITLE`, defaults to the commit message)
    pub pr_title: String,
    /// Pull request body (`PR_BODY`)
    pub pr_body: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` naming the first missing required
    /// variable.
    pub fn from_env() -> Result<Self, Error> {
        let event_path = PathBuf::from(required("GITHUB_EVENT_PATH")?);
        let token = required("GITHUB_TOKEN")?;
        let repo = required("TARGET_REPO")?;
        let file_path = required("TARGET_FILE")?;
        let replace_from = required("REPLACE_FROM")?;
        let replace_to = required("REPLACE_TO")?;

        let api_url = env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let commit_message =
            env::var("COMMIT_MESSAGE").unwrap_or_else(|_| format!("Update {file_path}"));
        let pr_title = env::var("PR_TITLE").unwrap_or_else(|_| commit_message.clone());
        let pr_body = env::var("PR_BODY").unwrap_or_else(|_| {
            format!("Automated update of `{file_path}` triggered by a release event.")
        });

        Ok(Self {
            event_path,
            token,
            repo,
            file_path,
            replace_from,
            replace_to,
            api_url,
            commit_message,
            pr_title,
            pr_body,
        })
    }
}

fn required(name: &'static str) -> Result<String, Error> {
    env::var(name)
        .map_err(|_| Error::Configuration(format!("{name} environment variable not set")))
}
