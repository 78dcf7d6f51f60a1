//! Transcript layout: messages flattened into pre-wrapped terminal lines.
//!
//! Wrapping happens here rather than in the `Paragraph` widget so the line
//! count used for scrolling is exactly what gets drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::core::message::Message;

/// Indentation of message bodies under their header line.
pub const CONTENT_INDENT: &str = "  ";
pub const THINKING_TEXT: &str = "Thinking...";

/// Greedy word wrap by display width. Explicit newlines are kept; words
/// longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut rows = Vec::new();
    for raw_line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0usize;
        let mut last_space: Option<usize> = None;

        for ch in raw_line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            while row_width + ch_width > width && !row.is_empty() {
                match last_space.take() {
                    Some(idx) => {
                        let rest = row.split_off(idx + 1);
                        let head = row.trim_end();
                        if !head.is_empty() {
                            rows.push(head.to_string());
                        }
                        row = rest;
                        row_width = row.width();
                    }
                    None => {
                        rows.push(std::mem::take(&mut row));
                        row_width = 0;
                    }
                }
            }
            if ch == ' ' {
                last_space = Some(row.len());
            }
            row.push(ch);
            row_width += ch_width;
        }
        rows.push(row);
    }
    rows
}

fn message_header(message: &Message, theme: &Theme) -> Line<'static> {
    let label_style = if message.is_user() {
        theme.user_prefix_style
    } else if message.is_error() {
        theme.error_prefix_style
    } else {
        theme.assistant_prefix_style
    };
    Line::from(vec![
        Span::styled(message.role().display_name(), label_style),
        Span::raw("  "),
        Span::styled(message.formatted_time(), theme.timestamp_style),
    ])
}

/// Flatten the conversation into display lines for a transcript `width` columns wide.
pub fn build_transcript_lines(
    messages: &[Message],
    is_pending: bool,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let body_width = (width as usize).saturating_sub(CONTENT_INDENT.len());
    let mut lines = Vec::new();

    for message in messages {
        let text_style = if message.is_user() {
            theme.user_text_style
        } else if message.is_error() {
            theme.error_text_style
        } else {
            theme.assistant_text_style
        };

        lines.push(message_header(message, theme));
        for row in wrap_text(message.content(), body_width) {
            lines.push(Line::from(vec![
                Span::raw(CONTENT_INDENT),
                Span::styled(row, text_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    if is_pending {
        lines.push(Line::from(Span::styled(
            "Gemini",
            theme.assistant_prefix_style,
        )));
        lines.push(Line::from(vec![
            Span::raw(CONTENT_INDENT),
            Span::styled(THINKING_TEXT, theme.thinking_style),
        ]));
    }

    lines
}

/// Top row to show so that the view sits `scroll_from_bottom` rows above the end.
pub fn scroll_offset(total_lines: usize, viewport_height: u16, scroll_from_bottom: u16) -> u16 {
    let max_offset = total_lines.saturating_sub(viewport_height as usize);
    let offset = max_offset.saturating_sub(scroll_from_bottom as usize);
    offset.min(u16::MAX as usize) as u16
}

/// A rectangle of the given size centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_text_breaks_at_spaces() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_text_keeps_newlines_and_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_text_counts_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(wrap_text("日本語です", 4), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn wrap_text_rows_never_exceed_width() {
        let inputs = [
            " abc日x",
            "日本 語です mixed 幅 text",
            "a 日本語 b",
            "  leading spaces then 長い単語です",
        ];
        for input in inputs {
            for width in 2..=10 {
                let rows = wrap_text(input, width);
                for row in &rows {
                    assert!(
                        row.width() <= width,
                        "row {row:?} is {} wide, limit {width} (input {input:?})",
                        row.width()
                    );
                    assert!(!row.is_empty(), "empty row for {input:?} at width {width}");
                }
                let kept: String = rows.concat().chars().filter(|c| *c != ' ').collect();
                let expected: String = input.chars().filter(|c| *c != ' ').collect();
                assert_eq!(kept, expected, "text lost for {input:?} at width {width}");
            }
        }
    }

    #[test]
    fn wrap_text_does_not_emit_row_for_leading_space_break() {
        assert_eq!(wrap_text(" abc日x", 4), vec!["abc", "日x"]);
    }

    #[test]
    fn transcript_has_header_body_and_spacer_per_message() {
        let theme = Theme::dark_default();
        let messages = vec![Message::user("Hello"), Message::assistant("Hi there!")];
        let lines = build_transcript_lines(&messages, false, &theme, 40);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].to_string().starts_with("You  "));
        assert_eq!(lines[1].to_string(), "  Hello");
        assert_eq!(lines[2].to_string(), "");
        assert!(lines[3].to_string().starts_with("Gemini  "));
        assert_eq!(lines[4].to_string(), "  Hi there!");
    }

    #[test]
    fn pending_adds_thinking_indicator() {
        let theme = Theme::dark_default();
        let messages = vec![Message::user("Hello")];
        let lines = build_transcript_lines(&messages, true, &theme, 40);
        assert_eq!(
            lines.last().map(|line| line.to_string()),
            Some(format!("{CONTENT_INDENT}{THINKING_TEXT}"))
        );
    }

    #[test]
    fn error_messages_use_error_style() {
        let theme = Theme::dark_default();
        let messages = vec![Message::assistant_error("Sorry")];
        let lines = build_transcript_lines(&messages, false, &theme, 40);
        assert_eq!(lines[1].spans[1].style, theme.error_text_style);
        assert_eq!(lines[0].spans[0].style, theme.error_prefix_style);
    }

    #[test]
    fn scroll_offset_follows_bottom_and_clamps() {
        assert_eq!(scroll_offset(5, 10, 0), 0);
        assert_eq!(scroll_offset(30, 10, 0), 20);
        assert_eq!(scroll_offset(30, 10, 5), 15);
        assert_eq!(scroll_offset(30, 10, 500), 0);
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), Rect::new(0, 0, 20, 10));
    }
}
