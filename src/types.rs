//! Wire types for the GitHub REST v3 endpoints this tool touches.

use serde::{Deserialize, Serialize};

/// A named ref (branch) pointing into the git object graph.
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    /// Fully qualified ref name, e.g. "refs/heads/master"
    #[serde(rename = "ref")]
    pub name: String,
    pub url: String,
    pub object: GitObject,
}

/// The object a ref points at.
#[derive(Debug, Clone, Deserialize)]
pub struct GitObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub sha: String,
    pub url: String,
}

/// Response from committing a file via the contents endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitResult {
    pub commit: CommitInfo,
}

/// The commit created by a contents-endpoint write.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// An opened pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    pub state: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
}

/// Body for `POST /repos/{repo}/git/refs`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRefRequest {
    #[serde(rename = "ref")]
    pub name: String,
    pub sha: String,
}

/// Body for `POST /repos/{repo}/pulls`.
#[derive(Debug, Clone, Serialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub body: String,
    pub head: String,
    pub base: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_ref_deserialize() {
        let json = r#"{
            "ref": "refs/heads/master",
            "node_id": "MDM6UmVmMTI5NjI2OTpyZWZzL2hlYWRzL21hc3Rlcg==",
            "url": "https://api.github.com/repos/octocat/Hello-World/git/refs/heads/master",
            "object": {
                "type": "commit",
                "sha": "aa218f56b14c9653891f9e74264a383fa43fefbd",
                "url": "https://api.github.com/repos/octocat/Hello-World/git/commits/aa218f56b14c9653891f9e74264a383fa43fefbd"
            }
        }"#;

        let git_ref: GitRef = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(git_ref.name, "refs/heads/master");
        assert_eq!(git_ref.object.sha, "aa218f56b14c9653891f9e74264a383fa43fefbd");
        assert_eq!(git_ref.object.kind, "commit");
    }

    #[test]
    fn test_pull_request_deserialize() {
        let json = r#"{
            "id": 1,
            "number": 1347,
            "state": "open",
            "title": "Update image to latest version",
            "body": "This updates the image",
            "html_url": "https://github.com/octocat/Hello-World/pull/1347"
        }"#;

        let pr: PullRequest = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(pr.number, 1347);
        assert_eq!(pr.state, "open");
    }

    #[test]
    fn test_create_ref_request_serializes_ref_key() {
        let req = CreateRefRequest {
            name: "refs/heads/update-0.0.1".to_string(),
            sha: "aa218f56b14c9653891f9e74264a383fa43fefbd".to_string(),
        };
        let value = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(value["ref"], "refs/heads/update-0.0.1");
        assert!(value.get("name").is_none());
    }
}
