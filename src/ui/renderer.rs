use crate::core::app::App;
use crate::core::constants::API_KEY_URL;
use crate::ui::layout::{build_transcript_lines, centered_rect, scroll_offset};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const NO_KEY_HINT: &str = "Please enter your API key to start chatting (Ctrl+K)";

/// Height of the transcript viewport for a terminal of `term_height` rows.
pub fn transcript_height(term_height: u16) -> u16 {
    // header (2) + input box (3) + notice (1)
    term_height.saturating_sub(6)
}

pub fn ui(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_transcript(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_notice(f, app, chunks[3]);

    if app.key_entry.is_open() {
        render_key_entry(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let key_status = if app.has_key() { "set" } else { "missing" };
    let header = vec![
        Line::from(Span::styled("Gemini AI ChatBot", theme.title_style)),
        Line::from(Span::styled(
            format!(
                "Powered by Google Gemini API • {} • key: {} • log: {}",
                app.session.model,
                key_status,
                app.session.logging.get_status_string()
            ),
            theme.subtitle_style,
        )),
    ];
    f.render_widget(Paragraph::new(header), area);
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let lines = build_transcript_lines(app.messages(), app.is_pending(), &app.ui.theme, area.width);
    let offset = scroll_offset(lines.len(), area.height, app.ui.scroll_from_bottom);
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn input_title(app: &App) -> &'static str {
    if app.is_pending() {
        "Waiting for Gemini... (Ctrl+C to quit)"
    } else if !app.has_key() {
        "Press Ctrl+K to enter your Gemini API key (Ctrl+C to quit)"
    } else {
        "Type your message (Enter to send, Ctrl+K for API key, Ctrl+C to quit)"
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(input_title(app), theme.input_title_style));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let editable = !app.is_pending() && !app.key_entry.is_open();
    if editable {
        f.render_widget(&app.ui.textarea, inner);
    } else {
        let text = app.ui.input_text();
        f.render_widget(
            Paragraph::new(text).style(theme.input_disabled_style),
            inner,
        );
    }
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.notice() {
        Some(notice) => notice,
        None if !app.has_key() => NO_KEY_HINT,
        None => return,
    };
    f.render_widget(
        Paragraph::new(Span::styled(text, app.ui.theme.notice_style)),
        area,
    );
}

fn render_key_entry(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    let area = centered_rect(64, 11, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.modal_border_style)
        .title(Span::styled(" API Key Required ", theme.modal_border_style))
        .style(Style::default().bg(theme.background_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Enter your Gemini API key to continue",
            theme.modal_text_style,
        )),
        rows[0],
    );

    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if app.key_entry.error().is_some() {
            theme.error_text_style
        } else {
            theme.input_border_style
        })
        .title(Span::styled("Gemini API Key", theme.input_title_style));
    let field_area = field_block.inner(rows[1]);
    f.render_widget(field_block, rows[1]);
    f.render_widget(app.key_entry.field(), field_area);

    if let Some(error) = app.key_entry.error() {
        f.render_widget(
            Paragraph::new(Span::styled(error, theme.error_text_style)),
            rows[2],
        );
    }

    let hint = format!("Don't have an API key? Get one free at {API_KEY_URL}");
    f.render_widget(
        Paragraph::new(hint)
            .style(theme.modal_hint_style)
            .wrap(Wrap { trim: true }),
        rows[3],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            "Enter: Save & Continue   Esc: Cancel",
            theme.modal_text_style,
        )),
        rows[4],
    );
}
