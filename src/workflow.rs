//! Repository change workflow.
//!
//! The fixed sequence behind one automated change: create the working
//! branch up front, let the caller fetch/mutate/commit through the scoped
//! client, then open the pull request.
//!
//! There is no rollback: a branch created here stays in place if a later
//! step fails or the workflow is aborted. A run that dies mid-sequence can
//! therefore leave a branch with no commit or PR behind; that is the only
//! failure-partial state and it is left for a human to clean up.

use tracing::warn;

use crate::client::RepoClient;
use crate::error::Error;
use crate::types::PullRequest;

/// An in-progress change: the working branch exists, the PR does not yet.
#[derive(Debug)]
pub struct ChangeWorkflow {
    client: RepoClient,
}

impl ChangeWorkflow {
    /// Start a workflow by creating the client's working branch.
    ///
    /// # Errors
    ///
    /// `BranchExists` if the branch is already there, otherwise whatever
    /// the ref calls surface. No branch is left behind when this fails
    /// before the ref POST succeeds.
    pub fn begin(client: RepoClient) -> Result<Self, Error> {
        client.create_branch()?;
        Ok(Self { client })
    }

    /// The scoped client, for the caller's fetch/mutate/commit steps.
    #[must_use]
    pub fn client(&self) -> &RepoClient {
        &self.client
    }

    /// Finish the workflow by opening the pull request.
    ///
    /// # Errors
    ///
    /// `Transport` on non-2xx. The branch and any commits on it remain
    /// either way.
    pub fn finish(self, title: &str, body: &str) -> Result<PullRequest, Error> {
        self.client.open_pull_request(title, body)
    }

    /// Abandon the workflow without opening a pull request.
    ///
    /// The working branch is not deleted.
    pub fn abort(self) {
        warn!(
            branch = %self.client.branch(),
            "workflow aborted; branch left in place"
        );
    }
}
