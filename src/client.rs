//! Repository client.
//!
//! Composes authenticated requests against one repository, scoped to one
//! working branch: fetch file, create branch, commit file, open pull
//! request. Statuses that carry endpoint-specific meaning (422 on ref
//! creation, 409/422 on commit) are remapped here into their typed errors.

use tracing::info;

use crate::error::{ApiError, Error};
use crate::file::RepoFile;
use crate::transport::HttpTransport;
use crate::types::{CommitResult, CreateRefRequest, GitRef, PullRequest, PullRequestRequest};

/// Default base branch new branches fork from and pull requests target.
pub const DEFAULT_BASE_BRANCH: &str = "master";

/// Client for one repository and one working branch.
#[derive(Debug)]
pub struct RepoClient {
    transport: HttpTransport,
    repo: String,
    branch: String,
    base_branch: String,
}

impl RepoClient {
    /// Create a client scoped to `repo` (owner/name form) and a working
    /// branch, targeting the default base branch.
    pub fn new(transport: HttpTransport, repo: &str, branch: &str) -> Self {
        Self {
            transport,
            repo: repo.to_string(),
            branch: branch.to_string(),
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
        }
    }

    /// Override the base branch (the branch forked from and PRed into).
    #[must_use]
    pub fn with_base_branch(mut self, base_branch: &str) -> Self {
        self.base_branch = base_branch.to_string();
        self
    }

    /// The working branch commits land on.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Fetch a file from the contents endpoint.
    ///
    /// # Errors
    ///
    /// `NotFound` (404), `Auth` (401/403), `Transport` otherwise.
    pub fn fetch_file(&self, path: &str) -> Result<RepoFile, Error> {
        self.transport
            .get(&format!("/repos/{}/contents/{}", self.repo, path))
    }

    /// Create the working branch at the base branch's current HEAD.
    ///
    /// Reads the base ref's sha, then posts a new `refs/heads/<branch>` ref
    /// pointing at it.
    ///
    /// # Errors
    ///
    /// `BranchExists` if the ref already exists (422), otherwise as
    /// [`RepoClient::fetch_file`].
    pub fn create_branch(&self) -> Result<GitRef, Error> {
        let head: GitRef = self.transport.get(&format!(
            "/repos/{}/git/refs/heads/{}",
            self.repo, self.base_branch
        ))?;

        let request = CreateRefRequest {
            name: format!("refs/heads/{}", self.branch),
            sha: head.object.sha,
        };

        let created = self
            .transport
            .post(&format!("/repos/{}/git/refs", self.repo), &request)
            .map_err(|err| match err {
                Error::Api(ApiError::Transport { status: 422, body }) => {
                    Error::Api(ApiError::BranchExists { body })
                }
                other => other,
            })?;

        info!(branch = %self.branch, "created branch");
        Ok(created)
    }

    /// Commit a file to the working branch via the contents endpoint.
    ///
    /// The file's sha rides along for the optimistic-concurrency check; the
    /// local copy is stale once the commit lands.
    ///
    /// # Errors
    ///
    /// `Conflict` if the remote sha has since changed (409/422), otherwise
    /// as [`RepoClient::fetch_file`].
    pub fn commit_file(&self, file: &RepoFile, message: &str) -> Result<CommitResult, Error> {
        let payload = file.commit_payload(message, &self.branch)?;

        let result: CommitResult = self
            .transport
            .put(
                &format!("/repos/{}/contents/{}", self.repo, file.path),
                &payload,
            )
            .map_err(|err| match err {
                Error::Api(ApiError::Transport {
                    status: status @ (409 | 422),
                    body,
                }) => Error::Api(ApiError::Conflict { status, body }),
                other => other,
            })?;

        info!(path = %file.path, sha = %result.commit.sha, "committed file");
        Ok(result)
    }

    /// Open a pull request from the working branch into the base branch.
    ///
    /// # Errors
    ///
    /// As [`RepoClient::fetch_file`].
    pub fn open_pull_request(&self, title: &str, body: &str) -> Result<PullRequest, Error> {
        let request = PullRequestRequest {
            title: title.to_string(),
            body: body.to_string(),
            head: self.branch.clone(),
            base: self.base_branch.clone(),
        };

        let pr: PullRequest = self
            .transport
            .post(&format!("/repos/{}/pulls", self.repo), &request)?;

        info!(number = pr.number, url = %pr.html_url, "opened pull request");
        Ok(pr)
    }
}
