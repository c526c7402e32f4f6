//! Chat panel: labeled message blocks and the typing indicator.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{ChatState, Sender};
use crate::ui::format;
use crate::ui::theme::{colors, MESSAGE_GAP};

/// Use pure white for chat body so it's visible in any terminal.
const CHAT_TEXT: Color = Color::White;

pub fn render(
    f: &mut Frame,
    chat: &ChatState,
    area: ratatui::prelude::Rect,
    composing: bool,
    spinner_char: char,
) {
    let mut lines: Vec<Line> = Vec::new();
    let mut first_message = true;

    for msg in &chat.messages {
        if !first_message {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        first_message = false;

        let (label, label_style) = match msg.sender {
            Sender::User => (
                "You",
                Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Sender::Assistant => (
                "Sidekick",
                Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD),
            ),
        };
        let stamp = msg.timestamp.format("%H:%M").to_string();
        // Continuation lines align under the start of the message text.
        let indent = " ".repeat(label.chars().count() + stamp.chars().count() + 3);

        let content_lines = format::to_lines(&msg.text);
        let mut it = content_lines.into_iter();
        if let Some(first) = it.next() {
            let mut spans = vec![
                Span::styled(format!("{label} "), label_style),
                Span::styled(format!("{stamp}  "), Style::default().fg(colors::MUTED)),
            ];
            for s in first {
                spans.push(s);
            }
            lines.push(Line::from(spans));
        }
        for line in it {
            let mut spans = vec![Span::raw(indent.clone())];
            for s in line {
                spans.push(s);
            }
            lines.push(Line::from(spans));
        }
    }

    if composing {
        if !lines.is_empty() {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        lines.push(Line::from(vec![
            Span::styled(
                "Sidekick ",
                Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {} ", spinner_char), Style::default().fg(colors::ACCENT)),
            Span::styled("Typing…", Style::default().fg(colors::TEXT_DIM)),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask anything · Enter to send",
            Style::default().fg(CHAT_TEXT),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let total = lines.len();
    let max_scroll = total.saturating_sub(height);
    let scroll = if chat.follow { max_scroll } else { chat.scroll.min(max_scroll) };
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    let para = Paragraph::new(visible)
        .style(Style::default().fg(CHAT_TEXT).bg(colors::BG))
        .wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}
