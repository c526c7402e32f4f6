//! Single-column layout: header, chat, suggestions, auto-grow input, status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    HEADER_HEIGHT, INPUT_MAX_ROWS, MARGIN_X, MIN_CHAT_LINES, STATUS_HEIGHT,
};

/// Prompt drawn at the left edge of the input bar.
pub const INPUT_PROMPT: &str = " ▸ ";
/// Columns the prompt occupies; text wraps inside the remainder.
pub const INPUT_PROMPT_WIDTH: u16 = 3;

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub chat: Rect,
    pub suggestions: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Rows the input text occupies when hard-wrapped at `width` columns.
/// A line that exactly fills its last row still gets a row for the cursor,
/// like a textarea.
pub fn wrap_rows(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.split('\n')
        .map(|line| line.chars().count() / width + 1)
        .sum::<usize>() as u16
}

/// Visual (row, col) of a byte cursor under the same hard-wrapping.
pub fn visual_cursor(text: &str, cursor: usize, width: u16) -> (u16, u16) {
    let width = width.max(1) as usize;
    let before = &text[..cursor.min(text.len())];
    let mut row = 0usize;
    let mut current = 0usize;
    for (i, line) in before.split('\n').enumerate() {
        if i > 0 {
            row += current / width + 1;
        }
        current = line.chars().count();
    }
    ((row + current / width) as u16, (current % width) as u16)
}

/// Input region height for the current buffer: wrapped rows clamped to the
/// auto-grow cap, plus the top border.
pub fn input_height(buffer: &str, area_width: u16) -> u16 {
    let text_width = area_width.saturating_sub(INPUT_PROMPT_WIDTH);
    wrap_rows(buffer, text_width).min(INPUT_MAX_ROWS) + 1
}

pub fn compute(area: Rect, input_height: u16, suggestion_rows: u16) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_CHAT_LINES),
            Constraint::Length(suggestion_rows),
            Constraint::Length(input_height),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let chat = Rect {
        x: area.x + MARGIN_X,
        y: chunks[1].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[1].height,
    };
    LayoutRegions {
        header: chunks[0],
        chat,
        suggestions: chunks[2],
        input: chunks[3],
        status: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_rows_counts_hard_wrapped_lines() {
        assert_eq!(wrap_rows("", 10), 1);
        assert_eq!(wrap_rows("abc", 10), 1);
        assert_eq!(wrap_rows("aaaaaaaaaa", 10), 2); // cursor row after a full line
        assert_eq!(wrap_rows("a\nb", 10), 2);
        assert_eq!(wrap_rows("aaaaaaaaaaaa\nb", 10), 3);
    }

    #[test]
    fn input_height_grows_with_content_up_to_the_cap() {
        let w = INPUT_PROMPT_WIDTH + 10;
        assert_eq!(input_height("", w), 2);
        assert_eq!(input_height("a\nb\nc", w), 4);
        // Far more rows than the cap allows.
        let tall = "x\n".repeat(30);
        assert_eq!(input_height(&tall, w), INPUT_MAX_ROWS + 1);
    }

    #[test]
    fn visual_cursor_tracks_wrapping_and_newlines() {
        assert_eq!(visual_cursor("abc", 1, 10), (0, 1));
        assert_eq!(visual_cursor("aaaaaaaaaaab", 11, 10), (1, 1));
        assert_eq!(visual_cursor("abcde\nfg", 7, 10), (1, 1));
        // End of a line that exactly fills a row sits on the next row.
        assert_eq!(visual_cursor("aaaaaaaaaa", 10, 10), (1, 0));
    }
}
