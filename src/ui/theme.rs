//! Theme: dark palette, layout constants, shared styles.

use ratatui::style::{Color, Modifier, Style};

pub mod colors {
    use super::*;
    /// Main canvas (chat area) — dark gray so white text pops.
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Input bar, status, suggestion list.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Primary accent (prompt, You label).
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// Sidekick label.
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    /// Body text.
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    /// Secondary text.
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    /// Inline code background.
    pub const CODE_BG: Color = Color::Rgb(0x1e, 0x24, 0x2e);

    /// Character counter in its three levels.
    pub const COUNTER_OK: Color = Color::Rgb(0x94, 0xa3, 0xb8);
    pub const COUNTER_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
    pub const COUNTER_ALERT: Color = Color::Rgb(0xef, 0x44, 0x44);
}

pub mod styles {
    use super::*;

    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }
    pub fn accent_bold() -> Style {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    }
    pub fn title_bold() -> Style {
        Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD)
    }
    pub fn text_dim() -> Style {
        Style::default().fg(colors::TEXT_DIM)
    }
    pub fn muted() -> Style {
        Style::default().fg(colors::MUTED)
    }
    pub fn elevated_bg() -> Style {
        Style::default().bg(colors::ELEVATED)
    }
}

pub const HEADER_HEIGHT: u16 = 5;
pub const STATUS_HEIGHT: u16 = 1;
pub const MIN_CHAT_LINES: u16 = 5;
/// Auto-grow cap for the input region, in rows.
pub const INPUT_MAX_ROWS: u16 = 5;
/// Blank line between messages.
pub const MESSAGE_GAP: usize = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
