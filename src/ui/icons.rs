//! Centralized icon constants for the panel.
//!
//! Components use these instead of referencing `egui_phosphor` directly so the
//! icon set stays consistent.

use egui_phosphor::regular as icons;

pub const PANEL_GIT_LOG: &str = icons::TREE_STRUCTURE;

pub const ACTION_REFRESH: &str = icons::ARROW_CLOCKWISE;
pub const ACTION_COPY: &str = icons::COPY;
pub const ACTION_CLOSE: &str = icons::X;
