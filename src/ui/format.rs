//! Message display formatting: fixed-order markup substitution.
//!
//! Four passes, in order: `**bold**`, `*italic*`, `` `code` ``, newline →
//! line break. Each pass only splits still-plain text, so markup consumed
//! by an earlier pass is gone by the time a later pass runs — markup
//! inside code spans mis-renders. That ordering is the source behavior
//! and is kept. A span never crosses a newline.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::colors;

/// Chat body text — white for maximum visibility.
const BODY_TEXT: Color = Color::White;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Markup {
    Plain,
    Bold,
    Italic,
    Code,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub markup: Markup,
    pub text: String,
}

impl Piece {
    fn plain(text: impl Into<String>) -> Self {
        Self { markup: Markup::Plain, text: text.into() }
    }
}

/// Runs the substitution passes and splits on newlines. Returns one piece
/// list per display line.
pub fn format_message(text: &str) -> Vec<Vec<Piece>> {
    let mut pieces = vec![Piece::plain(text)];
    pieces = apply_pass(pieces, "**", Markup::Bold);
    pieces = apply_pass(pieces, "*", Markup::Italic);
    pieces = apply_pass(pieces, "`", Markup::Code);
    split_lines(pieces)
}

/// Convert message text to styled lines for the chat panel.
pub fn to_lines(text: &str) -> Vec<Line<'static>> {
    format_message(text)
        .into_iter()
        .map(|pieces| {
            if pieces.is_empty() {
                return Line::from(Span::raw(""));
            }
            let spans: Vec<Span<'static>> = pieces
                .into_iter()
                .map(|p| match p.markup {
                    Markup::Plain => {
                        Span::styled(p.text, Style::default().fg(BODY_TEXT))
                    }
                    Markup::Bold => Span::styled(
                        p.text,
                        Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Markup::Italic => Span::styled(
                        p.text,
                        Style::default().fg(BODY_TEXT).add_modifier(Modifier::ITALIC),
                    ),
                    Markup::Code => Span::styled(
                        format!(" {} ", p.text),
                        Style::default().fg(colors::ACCENT).bg(colors::CODE_BG),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// One substitution pass: split plain pieces on `delim`-delimited spans.
/// Already-marked pieces pass through untouched.
fn apply_pass(pieces: Vec<Piece>, delim: &str, markup: Markup) -> Vec<Piece> {
    let mut out = Vec::new();
    for piece in pieces {
        if piece.markup != Markup::Plain {
            out.push(piece);
            continue;
        }
        let mut rest = piece.text.as_str();
        while let Some((start, inner, after)) = find_span(rest, delim) {
            if start > 0 {
                out.push(Piece::plain(&rest[..start]));
            }
            out.push(Piece { markup, text: inner.to_string() });
            rest = &rest[after..];
        }
        if !rest.is_empty() {
            out.push(Piece::plain(rest));
        }
    }
    out
}

/// First `delim…delim` span whose opener and closer sit on the same line.
/// Returns (opener offset, inner text, offset just past the closer).
fn find_span<'a>(s: &'a str, delim: &str) -> Option<(usize, &'a str, usize)> {
    let mut from = 0;
    while let Some(rel) = s[from..].find(delim) {
        let open = from + rel;
        let content_start = open + delim.len();
        let line_end = s[content_start..]
            .find('\n')
            .map_or(s.len(), |p| content_start + p);
        if let Some(rel_close) = s[content_start..line_end].find(delim) {
            let close = content_start + rel_close;
            return Some((open, &s[content_start..close], close + delim.len()));
        }
        // No closer on this line; retry from the next delimiter occurrence.
        from = open + 1;
    }
    None
}

fn split_lines(pieces: Vec<Piece>) -> Vec<Vec<Piece>> {
    let mut lines: Vec<Vec<Piece>> = vec![Vec::new()];
    for piece in pieces {
        if piece.markup == Markup::Plain && piece.text.contains('\n') {
            let mut parts = piece.text.split('\n');
            if let Some(first) = parts.next() {
                if !first.is_empty() {
                    lines.last_mut().expect("line").push(Piece::plain(first));
                }
            }
            for part in parts {
                lines.push(Vec::new());
                if !part.is_empty() {
                    lines.last_mut().expect("line").push(Piece::plain(part));
                }
            }
        } else {
            lines.last_mut().expect("line").push(piece);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(s: &str) -> Piece {
        Piece { markup: Markup::Bold, text: s.into() }
    }
    fn italic(s: &str) -> Piece {
        Piece { markup: Markup::Italic, text: s.into() }
    }
    fn code(s: &str) -> Piece {
        Piece { markup: Markup::Code, text: s.into() }
    }
    fn plain(s: &str) -> Piece {
        Piece::plain(s)
    }

    #[test]
    fn substitutions_apply_in_the_fixed_order() {
        let lines = format_message("**a** *b* `c`\nd");
        assert_eq!(
            lines,
            vec![
                vec![bold("a"), plain(" "), italic("b"), plain(" "), code("c")],
                vec![plain("d")],
            ]
        );
    }

    #[test]
    fn bold_inside_a_code_span_wins_over_the_code_pass() {
        // The bold pass runs first, so the backticks are left literal.
        let lines = format_message("`x **y** z`");
        assert_eq!(lines, vec![vec![plain("`x "), bold("y"), plain(" z`")]]);
    }

    #[test]
    fn spans_do_not_cross_newlines() {
        let lines = format_message("**a\nb**");
        assert!(lines
            .iter()
            .flatten()
            .all(|p| p.markup != Markup::Bold));
    }

    #[test]
    fn unpaired_delimiters_stay_literal() {
        let lines = format_message("a * b ` c");
        assert_eq!(lines, vec![vec![plain("a * b ` c")]]);
    }

    #[test]
    fn plain_text_is_one_plain_line() {
        let lines = format_message("hello");
        assert_eq!(lines, vec![vec![plain("hello")]]);
    }

    #[test]
    fn blank_lines_are_preserved() {
        let lines = format_message("a\n\nb");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }
}
