use eframe::egui;
use serde::{Deserialize, Serialize};

/// Stable panel identifier plus the ordering priority the host sorts docks by
/// (lower comes first).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelId {
    pub name: String,
    pub priority: u32,
}

impl PanelId {
    pub fn new(name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

/// Where the host docks a panel by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelSlot {
    LeftTop,
    #[default]
    LeftBottom,
    RightTop,
    RightBottom,
    Bottom,
}

/// Registration metadata for one dockable panel.
#[derive(Debug, Clone)]
pub struct PanelInfo {
    pub id: PanelId,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub default_slot: PanelSlot,
}

/// A mounted panel instance. `ui` is called every frame the panel is visible;
/// `dispose` exactly once when the host removes the panel.
pub trait PanelComponent {
    fn info(&self) -> &PanelInfo;
    fn ui(&mut self, ui: &mut egui::Ui);
    fn dispose(&mut self) {}
}

pub type PanelFactory = Box<dyn Fn() -> Box<dyn PanelComponent> + Send>;

/// Host-side registry plugins add their panels to during registration.
#[derive(Default)]
pub struct PanelRegistry {
    entries: Vec<(PanelInfo, PanelFactory)>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_panel(&mut self, info: PanelInfo, factory: PanelFactory) {
        self.entries.push((info, factory));
    }

    /// Registered panels, ordered by priority.
    pub fn panel_infos(&self) -> Vec<&PanelInfo> {
        let mut infos: Vec<&PanelInfo> = self.entries.iter().map(|(info, _)| info).collect();
        infos.sort_by_key(|info| info.id.priority);
        infos
    }

    /// Mount a fresh instance of the named panel.
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn PanelComponent>> {
        self.entries
            .iter()
            .find(|(info, _)| info.id.name == name)
            .map(|(_, factory)| factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, priority: u32) -> PanelInfo {
        PanelInfo {
            id: PanelId::new(name, priority),
            display_name: "Test",
            icon: "",
            default_slot: PanelSlot::default(),
        }
    }

    struct NoopPanel(PanelInfo);

    impl PanelComponent for NoopPanel {
        fn info(&self) -> &PanelInfo {
            &self.0
        }
        fn ui(&mut self, _ui: &mut egui::Ui) {}
    }

    #[test]
    fn panel_infos_are_ordered_by_priority() {
        let mut registry = PanelRegistry::new();
        for (name, priority) in [("terminal", 20), ("git-log", 15), ("files", 5)] {
            let panel_info = info(name, priority);
            let factory_info = panel_info.clone();
            registry.register_panel(
                panel_info,
                Box::new(move || Box::new(NoopPanel(factory_info.clone()))),
            );
        }

        let names: Vec<&str> = registry
            .panel_infos()
            .iter()
            .map(|info| info.id.name.as_str())
            .collect();
        assert_eq!(names, ["files", "git-log", "terminal"]);
    }

    #[test]
    fn instantiate_unknown_panel_returns_none() {
        let registry = PanelRegistry::new();
        assert!(registry.instantiate("git-log").is_none());
    }
}
