//! The Git Log panel: registration entry point, presentation-state adapter and
//! egui view.

mod view;
mod view_model;

#[cfg(test)]
pub(crate) mod testing;

pub use view::GitLogPanel;
pub use view_model::{GitLogViewModel, MESSAGE_TTL};

use std::sync::Arc;

use crate::api::{
    GitDataProvider, PanelId, PanelInfo, PanelSlot, Plugin, PluginContext, PluginManifest,
};
use crate::ui::icons;

/// Registration metadata for the Git Log panel: fixed identifier, dock
/// ordering priority and default placement at the bottom of the left dock.
pub fn panel_info() -> PanelInfo {
    PanelInfo {
        id: PanelId::new("git-log", 15),
        display_name: "Git Log",
        icon: icons::PANEL_GIT_LOG,
        default_slot: PanelSlot::LeftBottom,
    }
}

/// Git Log plugin: registers one panel backed by the host's git data provider.
/// Without a provider the registered factory mounts the placeholder variant.
#[derive(Default)]
pub struct GitLogPlugin {
    git_data_provider: Option<Arc<dyn GitDataProvider>>,
}

impl GitLogPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for GitLogPlugin {
    fn manifest(&self) -> PluginManifest {
        PluginManifest {
            plugin_id: "gitlog-panel",
            display_name: "Git Log",
            version: env!("CARGO_PKG_VERSION"),
            description: "View commit history with cherry-pick, revert and checkout actions",
            author: env!("CARGO_PKG_AUTHORS"),
            url: env!("CARGO_PKG_REPOSITORY"),
        }
    }

    fn register(&mut self, context: &mut PluginContext) {
        self.git_data_provider = context.git_data_provider.clone();

        let provider = self.git_data_provider.clone();
        context.panel_registry.register_panel(
            panel_info(),
            Box::new(move || Box::new(GitLogPanel::new(provider.clone()))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MockGitProvider;
    use super::*;

    #[test]
    fn plugin_registers_the_git_log_panel() {
        let mut context = PluginContext::new(None);
        let mut plugin = GitLogPlugin::new();
        plugin.register(&mut context);

        let infos = context.panel_registry.panel_infos();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].id, PanelId::new("git-log", 15));
        assert_eq!(infos[0].display_name, "Git Log");
        assert_eq!(infos[0].default_slot, PanelSlot::LeftBottom);
    }

    #[test]
    fn registered_factory_mounts_a_panel() {
        let provider: Arc<dyn GitDataProvider> = MockGitProvider::new();
        let mut context = PluginContext::new(Some(provider));
        let mut plugin = GitLogPlugin::new();
        plugin.register(&mut context);

        let panel = context
            .panel_registry
            .instantiate("git-log")
            .expect("panel registered");
        assert_eq!(panel.info().id.name, "git-log");
    }

    #[test]
    fn manifest_reports_crate_version() {
        let plugin = GitLogPlugin::new();
        let manifest = plugin.manifest();
        assert_eq!(manifest.plugin_id, "gitlog-panel");
        assert_eq!(manifest.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(manifest.author, env!("CARGO_PKG_AUTHORS"));
        assert_eq!(manifest.url, env!("CARGO_PKG_REPOSITORY"));
    }
}
