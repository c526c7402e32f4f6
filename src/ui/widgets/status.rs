//! Status bar: composing state on the left, key hints on the right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    composing: bool,
    spinner_char: char,
) {
    let left = if composing {
        format!(" {} Typing…", spinner_char)
    } else {
        " Ready".to_string()
    };
    let right = " Tab suggestion  Enter send  Ctrl+L clear  Ctrl+C quit ";
    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
