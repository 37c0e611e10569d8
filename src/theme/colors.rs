//! Colors - Vital Stats Theme Colors

use gpui::{Rgba, rgb, rgba};

use crate::state::NoticeLevel;

/// Vital Stats color palette - All colors are accessed via associated functions
pub struct VsColors;

impl VsColors {
    // Primary colors
    /// Header background - Deep green
    pub fn header_bg() -> Rgba { rgb(0x1b5e20) }
    /// Primary accent - Green (selected chips, main buttons)
    pub fn accent() -> Rgba { rgb(0x2e7d32) }
    /// Hover shade of the accent
    pub fn accent_hover() -> Rgba { rgb(0x256b29) }
    /// Soft accent for chip hover
    pub fn accent_soft() -> Rgba { rgb(0xe8f5e9) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf4f6f4) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Notice panel background - Dark green-gray
    pub fn notice_panel_bg() -> Rgba { rgb(0x1f2a24) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }
    pub fn transparent() -> Rgba { rgba(0x00000000) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xe8f5e9) }
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }

    /// Color of a notice severity label
    pub fn notice(level: NoticeLevel) -> Rgba {
        match level {
            NoticeLevel::Info => Self::info(),
            NoticeLevel::Success => Self::success(),
            NoticeLevel::Warning => Self::warning(),
            NoticeLevel::Error => Self::danger(),
        }
    }
}
