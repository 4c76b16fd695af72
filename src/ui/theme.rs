//! Fixed dark palette for the Git Log panel.
//!
//! The panel ships its own colors rather than reading the host theme; they
//! match the dark dock chrome the panel is designed to sit in.

use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub border: Color32,

    pub success: Color32,
    pub error: Color32,

    pub ref_head: Color32,
    pub ref_tag: Color32,
    pub ref_remote: Color32,
    pub ref_local: Color32,
}

pub const fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(0x1e, 0x1e, 0x1e),
        bg_secondary: Color32::from_rgb(0x2a, 0x2a, 0x2a),
        text_primary: Color32::from_rgb(0xe6, 0xe9, 0xef),
        text_secondary: Color32::from_rgb(0x9a, 0xa0, 0xa6),
        accent: Color32::from_rgb(0x6b, 0x9b, 0xfa),
        border: Color32::from_rgb(0x3c, 0x3c, 0x3c),

        success: Color32::from_rgb(0x2e, 0x7d, 0x32),
        error: Color32::from_rgb(0xb0, 0x00, 0x20),

        ref_head: Color32::from_rgb(0x6b, 0x9b, 0xfa),
        ref_tag: Color32::from_rgb(0xfd, 0xd6, 0x63),
        ref_remote: Color32::from_rgb(0x9a, 0xa0, 0xa6),
        ref_local: Color32::from_rgb(0x73, 0xc9, 0x91),
    }
}
