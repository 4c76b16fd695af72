use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// One commit as enumerated by the host. Identity is the full hash; the panel
/// never constructs or mutates these outside tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitCommitInfo {
    pub hash: String,
    pub short_hash: String,
    pub subject: String,
    pub author: String,
    pub author_email: String,
    /// Commit time, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Ref labels pointing at this commit (branches, tags, HEAD pointer), in
    /// the order the host produced them.
    pub refs: Vec<String>,
}

/// Failure outcome of a git action, carrying the host's human-readable
/// message. A cherry-pick conflict and a plain command failure look the same
/// from the panel's side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GitOperationError {
    pub message: String,
}

impl GitOperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type GitOperationResult = Result<(), GitOperationError>;

/// Host-owned git boundary.
///
/// State is exposed as `watch` channels: a single current value with change
/// notification, so any number of subscribers always observe the latest state.
/// The commit list is ordered newest-first.
#[async_trait]
pub trait GitDataProvider: Send + Sync {
    fn commit_log(&self) -> watch::Receiver<Vec<GitCommitInfo>>;
    fn is_git_repository(&self) -> watch::Receiver<bool>;
    fn is_loading(&self) -> watch::Receiver<bool>;

    /// Re-enumerate commit history. Infrastructure errors are the caller's to
    /// log; they do not carry a user-facing message.
    async fn refresh_log(&self) -> anyhow::Result<()>;

    async fn cherry_pick(&self, hash: &str) -> GitOperationResult;
    async fn revert(&self, hash: &str) -> GitOperationResult;
    async fn checkout(&self, hash: &str) -> GitOperationResult;
}
