//! Host API surface consumed by the panel.
//!
//! In the host application these types live on the plugin SDK side; they are
//! defined here so the plugin builds standalone. The host implements
//! [`GitDataProvider`] and owns the [`PanelRegistry`]; the plugin only ever
//! reads the observables and issues requests.

mod git;
mod panel;
mod plugin;

pub use git::{GitCommitInfo, GitDataProvider, GitOperationError, GitOperationResult};
pub use panel::{PanelComponent, PanelFactory, PanelId, PanelInfo, PanelRegistry, PanelSlot};
pub use plugin::{Plugin, PluginContext, PluginManifest};
