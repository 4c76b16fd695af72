//! Standalone demo host for the Git Log panel.
//!
//! Mounts the panel through the regular plugin registration path against a
//! scripted in-memory provider, so the whole flow (refresh, actions, message
//! banner) can be exercised without a host application:
//!
//! ```text
//! cargo run --features demo --bin gitlog-demo
//! ```

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use eframe::egui;
use tokio::sync::watch;

use gitlog_panel::api::{
    GitCommitInfo, GitDataProvider, GitOperationError, GitOperationResult, PanelComponent, Plugin,
    PluginContext,
};
use gitlog_panel::panel::GitLogPlugin;

static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");
    RUNTIME.set(rt).expect("Runtime already initialized");
    let _guard = RUNTIME.get().unwrap().enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_title("Git Log panel demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Git Log panel demo",
        options,
        Box::new(|cc| {
            gitlog_panel::ui::setup_fonts(&cc.egui_ctx);
            Ok(Box::new(DemoApp::new()))
        }),
    )
}

struct DemoApp {
    panel: Box<dyn PanelComponent>,
}

impl DemoApp {
    fn new() -> Self {
        let provider: Arc<dyn GitDataProvider> = Arc::new(ScriptedGitProvider::new());
        let mut context = PluginContext::new(Some(provider));
        let mut plugin = GitLogPlugin::new();
        plugin.register(&mut context);

        let panel = context
            .panel_registry
            .instantiate("git-log")
            .expect("git-log panel registered");
        Self { panel }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.ui(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.panel.dispose();
    }
}

/// In-memory provider with a seeded history. Refresh simulates a short scan;
/// revert always fails so the error banner can be seen.
struct ScriptedGitProvider {
    commit_log: watch::Sender<Vec<GitCommitInfo>>,
    is_git_repository: watch::Sender<bool>,
    is_loading: watch::Sender<bool>,
}

impl ScriptedGitProvider {
    fn new() -> Self {
        Self {
            commit_log: watch::Sender::new(Vec::new()),
            is_git_repository: watch::Sender::new(true),
            is_loading: watch::Sender::new(false),
        }
    }

    fn seeded_commits() -> Vec<GitCommitInfo> {
        let entries: [(&str, &str, &str, i64, &[&str]); 6] = [
            (
                "f4a9c81d2e7b5a3c9d1f0e8b7a6c5d4e3f2a1b0c",
                "Release v1.0.3",
                "Maya Chen",
                1_724_050_000,
                &["HEAD -> main", "tag: v1.0.3", "origin/main"],
            ),
            (
                "e3b8d70c1f6a4928c0d9e7f6b5a4c3d2e1f0a9b8",
                "Collapse sibling rows when a commit is expanded",
                "Maya Chen",
                1_723_960_000,
                &[],
            ),
            (
                "d2c7e69b0e5f3817b9c8d6e5a4b3c2d1e0f9a8b7",
                "Surface provider failures in the message banner",
                "Jon Park",
                1_723_870_000,
                &["origin/feature/banner"],
            ),
            (
                "c1b6d58a9d4e2706a8b7c5d4a3b2c1d0e9f8a7b6",
                "Wire the refresh button to the data provider",
                "Jon Park",
                1_723_780_000,
                &[],
            ),
            (
                "b0a5c47f8c3d1695978a6b4c3a2b1c0d9e8f7a6b",
                "Add ref badges for branches and tags",
                "Maya Chen",
                1_723_690_000,
                &["tag: v1.0.2"],
            ),
            (
                "a9f4b36e7b2c0584867b5a3b2a1b0c9d8e7f6a5b",
                "Initial panel skeleton",
                "Maya Chen",
                1_723_600_000,
                &[],
            ),
        ];

        entries
            .into_iter()
            .map(|(hash, subject, author, timestamp, refs)| GitCommitInfo {
                hash: hash.to_string(),
                short_hash: hash.chars().take(7).collect(),
                subject: subject.to_string(),
                author: author.to_string(),
                author_email: format!(
                    "{}@example.com",
                    author.to_lowercase().replace(' ', ".")
                ),
                timestamp,
                refs: refs.iter().map(|r| r.to_string()).collect(),
            })
            .collect()
    }
}

#[async_trait]
impl GitDataProvider for ScriptedGitProvider {
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
        self.is_loading.send_replace(true);
        tokio::time::sleep(Duration::from_millis(400)).await;
        self.commit_log.send_replace(Self::seeded_commits());
        self.is_loading.send_replace(false);
        Ok(())
    }

    async fn cherry_pick(&self, _hash: &str) -> GitOperationResult {
        tokio::time::sleep(Duration::from_millis(250)).await;
        Ok(())
    }

    async fn revert(&self, _hash: &str) -> GitOperationResult {
        tokio::time::sleep(Duration::from_millis(250)).await;
        Err(GitOperationError::new("conflict in src/lib.rs"))
    }

    async fn checkout(&self, _hash: &str) -> GitOperationResult {
        tokio::time::sleep(Duration::from_millis(250)).await;
        Ok(())
    }
}
