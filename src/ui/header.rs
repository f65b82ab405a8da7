use crate::model::MoviesState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MARQUEE_GOLD, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, fetching: bool, state: &MoviesState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status_text, status_style) = if fetching {
            ("fetching", Style::default().fg(MARQUEE_GOLD))
        } else if matches!(state, MoviesState::Error(_)) {
            ("error", Style::default().fg(STATUS_ERROR))
        } else {
            ("ready", Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  marquee", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("Popular Movies", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", status_style),
            Span::styled(status_text, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
