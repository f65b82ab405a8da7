use crate::domain::MovieSummary;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, MARQUEE_GOLD, POPUP_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, movie: &MovieSummary) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("★ {:.1}", movie.vote_average),
            Style::default().fg(MARQUEE_GOLD),
        ),
        Span::styled("  │  ", dim_style),
        Span::styled(
            movie.year().unwrap_or("unknown year").to_string(),
            text_style,
        ),
        Span::styled("  │  ", dim_style),
        Span::styled(format!("popularity {:.1}", movie.popularity), text_style),
    ])];
    lines.push(Line::from(""));
    if movie.overview.is_empty() {
        lines.push(Line::from(Span::styled("No overview available.", dim_style)));
    } else {
        lines.push(Line::from(Span::styled(movie.overview.clone(), text_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc: close", dim_style)));

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", movie.title),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        );
    frame.render_widget(dialog, area);
}
