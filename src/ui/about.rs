use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, MARQUEE_GOLD};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static second destination so the bottom bar has something to switch to.
pub fn render(frame: &mut Frame<'_>, area: Rect) {
    let title_style = Style::default().fg(MARQUEE_GOLD).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("marquee v{VERSION}"), title_style)),
        Line::from(""),
        Line::from(Span::styled(
            "A terminal client for browsing popular movies.",
            text_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Movies come from a local catalog; point the [catalog] section of",
            dim_style,
        )),
        Line::from(Span::styled(
            "the config (or --catalog) at your own TOML file to replace the",
            dim_style,
        )),
        Line::from(Span::styled("bundled sample list.", dim_style)),
        Line::from(""),
        Line::from(Span::styled(
            "Keys: ↑/↓ move · Enter details · r reload · Tab switch · q quit",
            dim_style,
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
