//! Input bar: auto-grow multi-row editor with the character counter in the
//! top border.

use ratatui::{
    layout::{Alignment, Position},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
    Frame,
};

use crate::state::{counter_level, CounterLevel};
use crate::ui::layout::{visual_cursor, INPUT_PROMPT, INPUT_PROMPT_WIDTH};
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, buffer: &str, cursor_pos: usize, area: ratatui::prelude::Rect) {
    let char_count = buffer.chars().count();
    let counter_color = match counter_level(char_count) {
        CounterLevel::Normal => colors::COUNTER_OK,
        CounterLevel::Warn => colors::COUNTER_WARN,
        CounterLevel::Alert => colors::COUNTER_ALERT,
    };
    let counter = Title::from(Line::from(Span::styled(
        format!(" {char_count} "),
        Style::default().fg(counter_color),
    )))
    .alignment(Alignment::Right);

    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .title(counter);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text_width = inner.width.saturating_sub(INPUT_PROMPT_WIDTH);
    let rows = wrapped_rows(buffer, text_width.max(1) as usize);
    let (cursor_row, cursor_col) = visual_cursor(buffer, cursor_pos, text_width);

    // Keep the cursor row in view when the buffer outgrows the region.
    let offset = (cursor_row as usize).saturating_sub(inner.height.saturating_sub(1) as usize);
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner.height as usize)
        .map(|(i, row)| {
            let lead = if i == 0 {
                Span::styled(
                    INPUT_PROMPT,
                    Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(" ".repeat(INPUT_PROMPT_WIDTH as usize))
            };
            Line::from(vec![lead, Span::styled(row.clone(), Style::default().fg(colors::TEXT))])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);

    let x = (inner.x + INPUT_PROMPT_WIDTH + cursor_col)
        .min(inner.x + inner.width.saturating_sub(1));
    let y = inner.y + (cursor_row as usize - offset).min(inner.height.saturating_sub(1) as usize) as u16;
    f.set_cursor_position(Position { x, y });
}

/// Hard-chunk the buffer into display rows of at most `width` chars. A
/// logical line that exactly fills its last row gets a trailing empty row,
/// matching the layout height math.
fn wrapped_rows(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        loop {
            let end = i + width;
            if end <= chars.len() {
                rows.push(chars[i..end].iter().collect());
                i = end;
            } else {
                rows.push(chars[i..].iter().collect());
                break;
            }
        }
    }
    rows
}
