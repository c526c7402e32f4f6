//! Suggestion chips: selectable canned prompts shown until the chat starts.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::SuggestionState;
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, suggestions: &SuggestionState, area: ratatui::prelude::Rect) {
    if !suggestions.visible || suggestions.items.is_empty() || area.height == 0 {
        return;
    }
    let block = Block::default()
        .title("  Try asking  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = suggestions
        .items
        .iter()
        .take(inner.height as usize)
        .enumerate()
        .map(|(i, chip)| {
            let selected = i == suggestions.selected_index;
            Line::from(vec![
                Span::styled(
                    if selected { "▎ " } else { "  " },
                    Style::default().fg(colors::ACCENT),
                ),
                Span::styled(
                    chip.label,
                    if selected {
                        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors::TEXT_DIM)
                    },
                ),
                Span::raw("  "),
                Span::styled(
                    chip.prompt,
                    Style::default().fg(if selected { colors::TEXT_DIM } else { colors::MUTED }),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
