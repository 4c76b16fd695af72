use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::api::{GitCommitInfo, GitDataProvider, PanelComponent, PanelInfo};
use crate::ui::{icons, spacing, theme};

use super::view_model::GitLogViewModel;

/// Which of the three sub-views the panel body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentMode {
    NotARepository,
    EmptyLog,
    CommitList,
}

impl ContentMode {
    /// Sub-view selection. The empty placeholder is suppressed while loading
    /// so a fresh repository scan does not flash "No commits yet".
    pub(crate) fn select(is_git_repository: bool, log_is_empty: bool, is_loading: bool) -> Self {
        if !is_git_repository {
            ContentMode::NotARepository
        } else if log_is_empty && !is_loading {
            ContentMode::EmptyLog
        } else {
            ContentMode::CommitList
        }
    }
}

/// Per-instance view state that survives across frames.
#[derive(Default)]
pub(crate) struct LogViewState {
    /// Hash of the single expanded row, if any.
    expanded_commit: Option<String>,
    /// Last observed repository flag, for the edge-triggered refresh.
    was_git_repository: bool,
}

impl LogViewState {
    fn is_expanded(&self, hash: &str) -> bool {
        self.expanded_commit.as_deref() == Some(hash)
    }

    /// Expand the row, collapsing whichever row was expanded before; clicking
    /// the expanded row collapses it.
    pub(crate) fn toggle_expanded(&mut self, hash: &str) {
        if self.is_expanded(hash) {
            self.expanded_commit = None;
        } else {
            self.expanded_commit = Some(hash.to_owned());
        }
    }

    /// Edge-triggered: true exactly when the flag transitions false -> true.
    /// The stored flag starts false, so the first observation of an already
    /// detected repository counts as an edge.
    pub(crate) fn repository_became_available(&mut self, is_git_repository: bool) -> bool {
        let edge = is_git_repository && !self.was_git_repository;
        self.was_git_repository = is_git_repository;
        edge
    }
}

/// The Git Log panel component. Without a provider it renders a static
/// placeholder; that variant never gains the provider at runtime.
pub struct GitLogPanel {
    info: PanelInfo,
    view_model: Option<GitLogViewModel>,
    view_state: LogViewState,
}

impl GitLogPanel {
    pub fn new(provider: Option<Arc<dyn GitDataProvider>>) -> Self {
        Self {
            info: super::panel_info(),
            view_model: provider.map(GitLogViewModel::new),
            view_state: LogViewState::default(),
        }
    }

    pub fn view_model(&self) -> Option<&GitLogViewModel> {
        self.view_model.as_ref()
    }
}

impl PanelComponent for GitLogPanel {
    fn info(&self) -> &PanelInfo {
        &self.info
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.painter().rect_filled(
            ui.available_rect_before_wrap(),
            egui::CornerRadius::ZERO,
            theme::palette().bg_primary,
        );

        let Self {
            view_model,
            view_state,
            ..
        } = self;
        match view_model {
            None => render_no_provider(ui),
            Some(vm) => render_log(ui, vm, view_state),
        }
    }

    fn dispose(&mut self) {
        if let Some(vm) = &self.view_model {
            vm.dispose();
        }
    }
}

fn render_no_provider(ui: &mut egui::Ui) {
    let theme = theme::palette();
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.4).max(spacing::SPACING_LG));
        ui.label(
            egui::RichText::new(icons::PANEL_GIT_LOG)
                .size(48.0)
                .color(theme.accent.gamma_multiply(0.5)),
        );
        ui.add_space(spacing::SPACING_LG);
        ui.label(
            egui::RichText::new("Git Log")
                .size(18.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(spacing::SPACING_SM);
        ui.label(
            egui::RichText::new("Git data provider not available")
                .size(12.0)
                .color(theme.text_secondary),
        );
    });
}

fn render_log(ui: &mut egui::Ui, vm: &GitLogViewModel, state: &mut LogViewState) {
    let commit_log = vm.commit_log().borrow().clone();
    let is_git_repository = *vm.is_git_repository().borrow();
    let is_loading = *vm.is_loading().borrow();
    let error_message = vm.error_message().borrow().clone();
    let success_message = vm.success_message().borrow().clone();

    // Refresh when the panel first sees a repository, and again whenever the
    // host re-detects one. Level stays quiet.
    if state.repository_became_available(is_git_repository) {
        vm.refresh_log();
    }

    render_toolbar(ui, vm, is_loading, commit_log.len());
    ui.separator();

    match ContentMode::select(is_git_repository, commit_log.is_empty(), is_loading) {
        ContentMode::NotARepository => centered_note(ui, "Not a Git repository"),
        ContentMode::EmptyLog => centered_note(ui, "No commits yet"),
        ContentMode::CommitList => {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for commit in &commit_log {
                        render_commit_row(ui, vm, state, commit);
                    }
                });
        }
    }

    // Error wins when both slots are momentarily populated.
    let (message, is_error) = match (error_message, success_message) {
        (Some(message), _) => (Some(message), true),
        (None, Some(message)) => (Some(message), false),
        (None, None) => (None, false),
    };
    if let Some(message) = message {
        render_message_banner(ui, vm, &message, is_error);
        // Expiry happens on the adapter's timer; keep painting until then.
        ui.ctx().request_repaint_after(Duration::from_millis(100));
    }
    if is_loading {
        ui.ctx().request_repaint_after(Duration::from_millis(100));
    }
}

fn render_toolbar(ui: &mut egui::Ui, vm: &GitLogViewModel, is_loading: bool, commit_count: usize) {
    let theme = theme::palette();
    ui.horizontal(|ui| {
        ui.add_space(spacing::SPACING_SM);
        ui.label(
            egui::RichText::new("Commit History")
                .size(12.0)
                .strong()
                .color(theme.text_primary),
        );
        if commit_count > 0 {
            ui.label(
                egui::RichText::new(format!("({commit_count})"))
                    .size(11.0)
                    .color(theme.text_secondary),
            );
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(spacing::SPACING_SM);
            let refresh = egui::Button::new(
                egui::RichText::new(icons::ACTION_REFRESH)
                    .size(14.0)
                    .color(theme.text_secondary),
            )
            .frame(false);
            if ui
                .add_enabled(!is_loading, refresh)
                .on_hover_text("Refresh")
                .clicked()
            {
                vm.refresh_log();
            }
            if is_loading {
                ui.add(egui::Spinner::new().size(12.0));
            }
        });
    });
}

fn centered_note(ui: &mut egui::Ui, text: &str) {
    let theme = theme::palette();
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(14.0)
                .color(theme.text_secondary),
        );
    });
}

fn render_commit_row(
    ui: &mut egui::Ui,
    vm: &GitLogViewModel,
    state: &mut LogViewState,
    commit: &GitCommitInfo,
) {
    let theme = theme::palette();
    let expanded = state.is_expanded(&commit.hash);
    let fill = if expanded {
        theme.bg_secondary
    } else {
        egui::Color32::TRANSPARENT
    };

    // The whole row toggles expansion, details block included. The container
    // sense is registered before its children, so the inner buttons keep
    // their own clicks.
    let row = ui
        .scope_builder(egui::UiBuilder::new().sense(egui::Sense::click()), |ui| {
            egui::Frame::new().fill(fill).show(ui, |ui| {
                render_commit_header(ui, commit);
                if expanded {
                    render_commit_details(ui, vm, commit);
                }
            });
        })
        .response;
    if row.clicked() {
        state.toggle_expanded(&commit.hash);
    }

    let line = ui.available_rect_before_wrap();
    ui.painter().hline(
        line.x_range(),
        line.top(),
        egui::Stroke::new(0.5, theme.border.gamma_multiply(0.5)),
    );
    ui.add_space(1.0);
}

fn render_commit_header(ui: &mut egui::Ui, commit: &GitCommitInfo) {
    let theme = theme::palette();
    ui.horizontal(|ui| {
        ui.add_space(spacing::SPACING_MD);
        ui.label(
            egui::RichText::new(&commit.short_hash)
                .monospace()
                .size(11.0)
                .color(theme.accent),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(spacing::SPACING_MD);
            ui.label(
                egui::RichText::new(format_commit_date(commit.timestamp))
                    .size(10.0)
                    .color(theme.text_secondary),
            );
            ui.label(
                egui::RichText::new(&commit.author)
                    .size(11.0)
                    .color(theme.text_secondary),
            );
            // Display truncation only; the record keeps all refs.
            for ref_label in commit.refs.iter().take(2) {
                ref_badge(ui, ref_label);
            }
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&commit.subject)
                        .size(12.0)
                        .color(theme.text_primary),
                )
                .truncate(),
            );
        });
    });
}

fn render_commit_details(ui: &mut egui::Ui, vm: &GitLogViewModel, commit: &GitCommitInfo) {
    let theme = theme::palette();
    ui.horizontal(|ui| {
        ui.add_space(spacing::DETAIL_INDENT);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Hash: ")
                        .size(11.0)
                        .color(theme.text_secondary),
                );
                ui.label(
                    egui::RichText::new(&commit.hash)
                        .monospace()
                        .size(11.0)
                        .color(theme.text_primary),
                );
                let copy = egui::Button::new(
                    egui::RichText::new(icons::ACTION_COPY)
                        .size(11.0)
                        .color(theme.text_secondary),
                )
                .frame(false);
                if ui.add(copy).on_hover_text("Copy hash").clicked() {
                    ui.ctx().copy_text(commit.hash.clone());
                    vm.show_success("Copied commit hash");
                }
            });
            ui.label(
                egui::RichText::new(format!(
                    "Author: {} <{}>",
                    commit.author, commit.author_email
                ))
                .size(11.0)
                .color(theme.text_secondary),
            );
            ui.add_space(spacing::SPACING_SM);
            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("Cherry-pick").size(10.0)).clicked() {
                    vm.cherry_pick(&commit.hash, &commit.short_hash);
                }
                if ui.button(egui::RichText::new("Revert").size(10.0)).clicked() {
                    vm.revert(&commit.hash, &commit.short_hash);
                }
                if ui.button(egui::RichText::new("Checkout").size(10.0)).clicked() {
                    vm.checkout(&commit.hash, &commit.short_hash);
                }
            });
            ui.add_space(spacing::SPACING_XS);
        });
    });
}

fn render_message_banner(ui: &mut egui::Ui, vm: &GitLogViewModel, message: &str, is_error: bool) {
    let theme = theme::palette();
    let fill = if is_error { theme.error } else { theme.success };
    let anchor = ui.clip_rect().center_bottom() - egui::vec2(0.0, spacing::SPACING_LG);

    egui::Area::new(ui.id().with("git-log-message"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(anchor)
        .show(ui.ctx(), |ui| {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(spacing::RADIUS_MD))
                .inner_margin(egui::Margin::symmetric(
                    spacing::SPACING_MD as i8,
                    spacing::SPACING_SM as i8,
                ))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(message)
                                .size(12.0)
                                .color(egui::Color32::WHITE),
                        );
                        let dismiss = egui::Button::new(
                            egui::RichText::new(icons::ACTION_CLOSE)
                                .size(10.0)
                                .color(egui::Color32::WHITE),
                        )
                        .frame(false);
                        if ui.add(dismiss).clicked() {
                            vm.clear_messages();
                        }
                    });
                });
        });
}

/// Ref badge. `"HEAD -> main"` renders as just the branch name.
fn ref_badge(ui: &mut egui::Ui, label: &str) {
    let (bg, fg) = ref_style(label);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(egui::CornerRadius::same(spacing::RADIUS_SM))
        .inner_margin(egui::Margin::symmetric(4, 1))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(ref_display(label)).size(9.0).color(fg));
        });
}

/// Stateless mapping from a ref label to badge colors.
pub(crate) fn ref_style(label: &str) -> (egui::Color32, egui::Color32) {
    let theme = theme::palette();
    if label.contains("HEAD") {
        (theme.ref_head, egui::Color32::WHITE)
    } else if label.starts_with("tag:") {
        (theme.ref_tag, egui::Color32::BLACK)
    } else if label.starts_with("origin/") {
        (theme.ref_remote, egui::Color32::WHITE)
    } else {
        (theme.ref_local, egui::Color32::WHITE)
    }
}

pub(crate) fn ref_display(label: &str) -> &str {
    label.strip_prefix("HEAD -> ").unwrap_or(label)
}

fn format_commit_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|utc| {
            utc.with_timezone(&chrono::Local)
                .format("%b %d, %Y %H:%M")
                .to_string()
        })
        .unwrap_or_default()
}
