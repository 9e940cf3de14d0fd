//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Username field styles
pub mod input {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = palette::CURSOR;
}

/// Search button styles
pub mod button {
    use super::*;

    pub const ENABLED_TEXT: Color = palette::TEXT;
    pub const ENABLED_BORDER: Color = palette::PURPLE;
    pub const DISABLED_TEXT: Color = palette::TEXT_DIM;
    pub const DISABLED_BORDER: Color = palette::TEXT_DIM;
}

/// Statistics region styles
pub mod stats {
    use super::*;

    pub const BORDER: Color = palette::TEXT_MUTED;
    pub const HINT: Color = palette::TEXT_MUTED;
    pub const NO_DATA: Color = palette::RED;

    // Tier colors follow the usual green/yellow/red difficulty convention
    pub const EASY: Color = palette::GREEN;
    pub const MEDIUM: Color = palette::YELLOW;
    pub const HARD: Color = palette::RED;
    pub const GAUGE_TRACK: Color = palette::BG_HIGHLIGHT;

    pub const CARD_BORDER: Color = palette::PURPLE;
    pub const CARD_VALUE: Color = palette::TEXT;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ALERT: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(26, 26, 46),
        border: Color::Rgb(255, 135, 145),
    };

    pub const ALERT_HINT: Color = Color::Rgb(130, 133, 158);
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
    pub const STATUS_OK: Color = palette::GREEN;
    pub const STATUS_FAILED: Color = palette::RED;
    pub const STATUS_PENDING: Color = palette::CYAN;
}
