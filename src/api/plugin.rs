use std::sync::Arc;

use serde::Serialize;

use super::{GitDataProvider, PanelRegistry};

/// Static identity a plugin reports to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub plugin_id: &'static str,
    pub display_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub url: &'static str,
}

/// Capabilities handed to a plugin at registration time.
///
/// The git provider is optional: a host that has not wired one up yet still
/// loads the plugin, which then mounts its non-interactive placeholder
/// variant.
pub struct PluginContext {
    pub git_data_provider: Option<Arc<dyn GitDataProvider>>,
    pub panel_registry: PanelRegistry,
}

impl PluginContext {
    pub fn new(git_data_provider: Option<Arc<dyn GitDataProvider>>) -> Self {
        Self {
            git_data_provider,
            panel_registry: PanelRegistry::new(),
        }
    }
}

pub trait Plugin {
    fn manifest(&self) -> PluginManifest;

    /// Called once while the host loads the plugin. Panels registered here are
    /// instantiated lazily by the host's dock layout.
    fn register(&mut self, context: &mut PluginContext);
}
