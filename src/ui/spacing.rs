//! Standardized spacing constants for the panel UI.

/// Extra small spacing value (4px)
pub const SPACING_XS: f32 = 4.0;

/// Small spacing value (8px)
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing value (12px)
pub const SPACING_MD: f32 = 12.0;

/// Large spacing value (16px)
pub const SPACING_LG: f32 = 16.0;

/// Corner radius for small chrome such as ref badges
pub const RADIUS_SM: u8 = 3;

/// Corner radius for the message toast
pub const RADIUS_MD: u8 = 4;

/// Indent of the expanded-row detail block, aligning it under the subject
pub const DETAIL_INDENT: f32 = 72.0;
