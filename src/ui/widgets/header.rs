//! Header banner: title, version, endpoint or offline notice.

use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::styles;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const QUIT_HINT: &str = " Ctrl+C quit ";
const ENDPOINT_LABEL: &str = "endpoint: ";
const OFFLINE_NOTICE: &str = "offline · canned replies";

/// Truncate to `max_chars` from the end with ellipsis. Single pass over chars.
fn truncate_end(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    let skip = count.saturating_sub(take);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, endpoint: &str, offline: bool) {
    // Total width available, minus 2 for leading "  " indent.
    let total = (area.width as usize).saturating_sub(2);
    // Number of horizontal dashes between the corners (╭ and ╮ take 1 each).
    let dash_count = total.saturating_sub(2);
    // Inner content width = between the "│ " and " │" (1 border + 1 space each side = 4).
    let inner = total.saturating_sub(4);

    let top_line = format!("╭{}╮", "─".repeat(dash_count));
    let bottom_line = format!("╰{}╯", "─".repeat(dash_count));

    let hint_len = QUIT_HINT.chars().count();
    let title_len = "✦ Sidekick ".chars().count() + format!("(v{VERSION})").chars().count();
    let pad = inner.saturating_sub(title_len + hint_len);

    let (detail_label, detail) = if offline {
        ("mode: ", OFFLINE_NOTICE.to_string())
    } else {
        (ENDPOINT_LABEL, endpoint.to_string())
    };
    let detail_max = inner.saturating_sub(detail_label.chars().count());
    let detail_show = truncate_end(&detail, detail_max);
    let detail_len = detail_label.chars().count() + detail_show.chars().count();
    let detail_pad = inner.saturating_sub(detail_len);

    let border = styles::border();
    let lines = vec![
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(top_line, border),
        ]),
        Line::from(vec![
            Span::styled("  │ ", border),
            Span::styled("✦ ", styles::accent_bold()),
            Span::styled("Sidekick ", styles::title_bold()),
            Span::styled(format!("(v{VERSION})"), styles::text_dim()),
            Span::raw(" ".repeat(pad)),
            Span::styled(QUIT_HINT, styles::muted()),
            Span::styled("│", border),
        ]),
        Line::from(vec![
            Span::styled("  │", border),
            Span::raw(" ".repeat(dash_count.saturating_sub(1))),
            Span::styled("│", border),
        ]),
        Line::from(vec![
            Span::styled("  │ ", border),
            Span::styled(detail_label, styles::text_dim()),
            Span::styled(detail_show, styles::muted()),
            Span::raw(" ".repeat(detail_pad)),
            Span::styled("│", border),
        ]),
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(bottom_line, border),
        ]),
    ];

    let para = Paragraph::new(lines).style(styles::elevated_bg());
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_end_keeps_the_tail() {
        assert_eq!(truncate_end("short", 10), "short");
        assert_eq!(truncate_end("http://127.0.0.1:3000", 8), "….1:3000");
    }
}
