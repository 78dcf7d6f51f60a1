use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Header
    pub title_style: Style,
    pub subtitle_style: Style,

    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_prefix_style: Style,
    pub assistant_text_style: Style,
    pub error_prefix_style: Style,
    pub error_text_style: Style,
    pub timestamp_style: Style,
    pub thinking_style: Style,

    // Input area
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub input_cursor_style: Style,
    pub input_disabled_style: Style,
    pub notice_style: Style,

    // Key entry modal
    pub modal_border_style: Style,
    pub modal_text_style: Style,
    pub modal_hint_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,

            title_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(Color::Gray),

            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_prefix_style: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::White),
            error_prefix_style: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            error_text_style: Style::default().fg(Color::LightRed),
            timestamp_style: Style::default().fg(Color::DarkGray),
            thinking_style: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::ITALIC),

            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            input_disabled_style: Style::default().fg(Color::DarkGray),
            notice_style: Style::default().fg(Color::LightRed),

            modal_border_style: Style::default().fg(Color::Yellow),
            modal_text_style: Style::default().fg(Color::White),
            modal_hint_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,

            title_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(Color::DarkGray),

            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_prefix_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::Black),
            error_prefix_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            error_text_style: Style::default().fg(Color::Red),
            timestamp_style: Style::default().fg(Color::Gray),
            thinking_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),

            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            input_disabled_style: Style::default().fg(Color::Gray),
            notice_style: Style::default().fg(Color::Red),

            modal_border_style: Style::default().fg(Color::Magenta),
            modal_text_style: Style::default().fg(Color::Black),
            modal_hint_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark_default(),
        }
    }
}
