//! Test fixtures: a scriptable in-memory git provider.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Notify, watch};

use crate::api::{GitCommitInfo, GitDataProvider, GitOperationError, GitOperationResult};

/// How a mocked operation behaves when called.
#[derive(Clone)]
pub(crate) enum OpBehavior {
    Succeed,
    Fail(&'static str),
    /// Wait on the notify gate, then succeed.
    Block(Arc<Notify>),
}

impl OpBehavior {
    async fn run(&self) -> GitOperationResult {
        match self {
            OpBehavior::Succeed => Ok(()),
            OpBehavior::Fail(message) => Err(GitOperationError::new(*message)),
            OpBehavior::Block(gate) => {
                gate.notified().await;
                Ok(())
            }
        }
    }
}

pub(crate) struct MockGitProvider {
    commit_log: watch::Sender<Vec<GitCommitInfo>>,
    is_git_repository: watch::Sender<bool>,
    is_loading: watch::Sender<bool>,
    refresh_calls: AtomicUsize,
    refresh: Mutex<OpBehavior>,
    cherry_pick: Mutex<OpBehavior>,
    revert: Mutex<OpBehavior>,
    checkout: Mutex<OpBehavior>,
}

impl MockGitProvider {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            commit_log: watch::Sender::new(Vec::new()),
            is_git_repository: watch::Sender::new(true),
            is_loading: watch::Sender::new(false),
            refresh_calls: AtomicUsize::new(0),
            refresh: Mutex::new(OpBehavior::Succeed),
            cherry_pick: Mutex::new(OpBehavior::Succeed),
            revert: Mutex::new(OpBehavior::Succeed),
            checkout: Mutex::new(OpBehavior::Succeed),
        })
    }

    pub(crate) fn set_refresh(&self, behavior: OpBehavior) {
        *self.refresh.lock().unwrap() = behavior;
    }

    pub(crate) fn set_revert(&self, behavior: OpBehavior) {
        *self.revert.lock().unwrap() = behavior;
    }

    pub(crate) fn set_cherry_pick_blocked(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.cherry_pick.lock().unwrap() = OpBehavior::Block(gate.clone());
        gate
    }

    pub(crate) fn set_repository(&self, is_repo: bool) {
        self.is_git_repository.send_replace(is_repo);
    }

    pub(crate) fn set_commits(&self, commits: Vec<GitCommitInfo>) {
        self.commit_log.send_replace(commits);
    }

    pub(crate) fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    fn behavior(slot: &Mutex<OpBehavior>) -> OpBehavior {
        slot.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitDataProvider for MockGitProvider {
    fn commit_log(&self) -> watch::Receiver<Vec<GitCommitInfo>> {
        self.commit_log.subscribe()
    }

    fn is_git_repository(&self) -> watch::Receiver<bool> {
        self.is_git_repository.subscribe()
    }

    fn is_loading(&self) -> watch::Receiver<bool> {
        self.is_loading.subscribe()
    }

    async fn refresh_log(&self) -> anyhow::Result<()> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        match Self::behavior(&self.refresh).run().await {
            Ok(()) => Ok(()),
            Err(err) => Err(anyhow::anyhow!(err.message)),
        }
    }

    async fn cherry_pick(&self, _hash: &str) -> GitOperationResult {
        Self::behavior(&self.cherry_pick).run().await
    }

    async fn revert(&self, _hash: &str) -> GitOperationResult {
        Self::behavior(&self.revert).run().await
    }

    async fn checkout(&self, _hash: &str) -> GitOperationResult {
        Self::behavior(&self.checkout).run().await
    }
}

pub(crate) fn make_commit(hash: &str, subject: &str, refs: &[&str]) -> GitCommitInfo {
    GitCommitInfo {
        hash: hash.to_string(),
        short_hash: hash.chars().take(7).collect(),
        subject: subject.to_string(),
        author: "Ada Lovelace".to_string(),
        author_email: "ada@example.com".to_string(),
        timestamp: 1_717_245_296,
        refs: refs.iter().map(|r| r.to_string()).collect(),
    }
}
