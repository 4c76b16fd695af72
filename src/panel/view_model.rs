use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::api::{GitCommitInfo, GitDataProvider};

/// How long a transient status message stays visible before the adapter
/// clears it.
pub const MESSAGE_TTL: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy)]
enum GitAction {
    CherryPick,
    Revert,
    Checkout,
}

/// Presentation-state adapter for the Git Log panel.
///
/// Republishes the provider's reactive state untouched and owns the two
/// transient message slots. Every provider call is forwarded as a
/// fire-and-forget task scoped to this instance; [`dispose`](Self::dispose)
/// cancels them as a unit, and a result that races disposal is dropped
/// unobserved.
pub struct GitLogViewModel {
    provider: Arc<dyn GitDataProvider>,
    messages: MessageSlots,
    tracker: TaskTracker,
    cancel: CancellationToken,
    handle: tokio::runtime::Handle,
}

/// The error and success slots plus the stamp that ties each expiry timer to
/// the message it was scheduled for, so a stale timer never clears a newer
/// message.
#[derive(Clone)]
struct MessageSlots {
    error: watch::Sender<Option<String>>,
    success: watch::Sender<Option<String>>,
    stamp: Arc<AtomicU64>,
}

impl MessageSlots {
    fn new() -> Self {
        Self {
            error: watch::Sender::new(None),
            success: watch::Sender::new(None),
            stamp: Arc::new(AtomicU64::new(0)),
        }
    }

    fn set_error(&self, message: String) -> u64 {
        let stamp = self.stamp.fetch_add(1, Ordering::SeqCst) + 1;
        self.error.send_replace(Some(message));
        stamp
    }

    fn set_success(&self, message: String) -> u64 {
        let stamp = self.stamp.fetch_add(1, Ordering::SeqCst) + 1;
        self.success.send_replace(Some(message));
        stamp
    }

    fn clear(&self) {
        self.stamp.fetch_add(1, Ordering::SeqCst);
        self.error.send_replace(None);
        self.success.send_replace(None);
    }

    fn clear_if_current(&self, stamp: u64) {
        if self.stamp.load(Ordering::SeqCst) == stamp {
            self.error.send_replace(None);
            self.success.send_replace(None);
        }
    }
}

impl GitLogViewModel {
    pub fn new(provider: Arc<dyn GitDataProvider>) -> Self {
        Self {
            provider,
            messages: MessageSlots::new(),
            tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
            handle: crate::runtime_handle(),
        }
    }

    pub fn commit_log(&self) -> watch::Receiver<Vec<GitCommitInfo>> {
        self.provider.commit_log()
    }

    pub fn is_git_repository(&self) -> watch::Receiver<bool> {
        self.provider.is_git_repository()
    }

    pub fn is_loading(&self) -> watch::Receiver<bool> {
        self.provider.is_loading()
    }

    pub fn error_message(&self) -> watch::Receiver<Option<String>> {
        self.messages.error.subscribe()
    }

    pub fn success_message(&self) -> watch::Receiver<Option<String>> {
        self.messages.success.subscribe()
    }

    /// Ask the host to re-enumerate commit history. Failures are logged, not
    /// shown: only the three action operations feed the message banner.
    pub fn refresh_log(&self) {
        let provider = self.provider.clone();
        self.spawn(async move {
            if let Err(err) = provider.refresh_log().await {
                log::warn!("git log refresh failed: {err:#}");
            }
        });
    }

    pub fn cherry_pick(&self, hash: &str, short_hash: &str) {
        self.forward(GitAction::CherryPick, hash, format!("Cherry-picked {short_hash}"));
    }

    pub fn revert(&self, hash: &str, short_hash: &str) {
        self.forward(GitAction::Revert, hash, format!("Reverted {short_hash}"));
    }

    pub fn checkout(&self, hash: &str, short_hash: &str) {
        self.forward(GitAction::Checkout, hash, format!("Checked out {short_hash}"));
    }

    /// Show a success message for a purely local action (e.g. a clipboard
    /// copy) that never touches the provider. The slot is set before this
    /// returns; only the expiry timer runs asynchronously.
    pub fn show_success(&self, message: impl Into<String>) {
        let stamp = self.messages.set_success(message.into());
        let messages = self.messages.clone();
        self.spawn(async move {
            tokio::time::sleep(MESSAGE_TTL).await;
            messages.clear_if_current(stamp);
        });
    }

    /// Empty both message slots immediately.
    pub fn clear_messages(&self) {
        self.messages.clear();
    }

    /// Cancel every in-flight forward. Idempotent. After this returns, no
    /// pending provider result can touch the message slots.
    pub fn dispose(&self) {
        self.cancel.cancel();
        self.tracker.close();
    }

    fn forward(&self, action: GitAction, hash: &str, success_message: String) {
        let provider = self.provider.clone();
        let messages = self.messages.clone();
        let hash = hash.to_owned();
        self.spawn(async move {
            let result = match action {
                GitAction::CherryPick => provider.cherry_pick(&hash).await,
                GitAction::Revert => provider.revert(&hash).await,
                GitAction::Checkout => provider.checkout(&hash).await,
            };
            // Exactly one slot is written per completed call; the other kind
            // is intentionally left as-is.
            let stamp = match result {
                Ok(()) => messages.set_success(success_message),
                Err(err) => messages.set_error(err.message),
            };
            tokio::time::sleep(MESSAGE_TTL).await;
            messages.clear_if_current(stamp);
        });
    }

    // Each forward runs as its own task, so one failing or panicking forward
    // never takes down a sibling. The token is polled first: a result that
    // completes concurrently with dispose() is dropped.
    fn spawn(&self, fut: impl Future<Output = ()> + Send + 'static) {
        if self.tracker.is_closed() {
            return;
        }
        let cancel = self.cancel.clone();
        self.tracker.spawn_on(
            async move {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {}
                    _ = fut => {}
                }
            },
            &self.handle,
        );
    }

    /// Wait for every tracked forward to settle. Only meaningful after
    /// [`dispose`](Self::dispose).
    #[cfg(test)]
    pub(crate) async fn join(&self) {
        self.tracker.wait().await;
    }
}
