//! Git Log panel plugin.
//!
//! A single dockable panel that renders commit history and forwards
//! cherry-pick / revert / checkout actions to a host-supplied
//! [`api::GitDataProvider`]. The host owns all actual git work; this crate is
//! the panel registration, the presentation-state adapter and the egui view.

pub mod api;
pub mod panel;
pub mod ui;

use tokio::runtime::{Handle, Runtime};

lazy_static::lazy_static! {
    static ref RUNTIME: Runtime = Runtime::new().expect("Failed to create Tokio runtime");
}

/// Handle the view-model spawns its forwards on: the ambient runtime when the
/// host provides one, otherwise the crate's shared runtime.
pub(crate) fn runtime_handle() -> Handle {
    Handle::try_current().unwrap_or_else(|_| RUNTIME.handle().clone())
}
