pub mod icons;
pub mod spacing;
pub mod theme;

use eframe::egui;

/// Install the phosphor icon font alongside egui's defaults. Hosts embedding
/// the panel call this once at startup; without it the icon glyphs render as
/// boxes.
pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
