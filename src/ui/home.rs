use crate::model::MoviesState;
use crate::ui::app::App;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, MARQUEE_GOLD, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Movies destination: renders whatever the state cell currently holds.
pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    match app.movies_state() {
        MoviesState::Idle => render_message(frame, area, "Waiting to start…", HEADER_SEPARATOR),
        MoviesState::Loading => {
            let spinner = SPINNER_FRAMES[app.spinner_phase() % SPINNER_FRAMES.len()];
            render_message(
                frame,
                area,
                &format!("{spinner} Loading popular movies…"),
                HEADER_TEXT,
            );
        }
        MoviesState::Success(movies) => render_list(frame, area, app, &movies),
        MoviesState::Error(err) => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("✗ {err}"),
                    Style::default().fg(STATUS_ERROR),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to retry.",
                    Style::default().fg(HEADER_SEPARATOR),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(paragraph, padded(area));
        }
    }
}

fn render_message(frame: &mut Frame<'_>, area: Rect, message: &str, color: ratatui::style::Color) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, padded(area));
}

fn render_list(frame: &mut Frame<'_>, area: Rect, app: &App, movies: &[crate::domain::MovieSummary]) {
    if movies.is_empty() {
        render_message(frame, area, "No movies in the catalog.", HEADER_SEPARATOR);
        return;
    }

    let items: Vec<ListItem<'_>> = movies
        .iter()
        .map(|movie| {
            let year = movie.year().unwrap_or("————");
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<40}", truncate(&movie.title, 40)),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(format!("  {year}  "), Style::default().fg(HEADER_SEPARATOR)),
                Span::styled(
                    format!("★ {:.1}", movie.vote_average),
                    Style::default().fg(MARQUEE_GOLD),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} movies ", movies.len()))
                .borders(Borders::NONE),
        )
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.cursor().min(movies.len() - 1)));
    frame.render_stateful_widget(list, padded(area), &mut list_state);
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_leaves_short_titles_alone() {
        assert_eq!(truncate("Heat", 40), "Heat");
    }

    #[test]
    fn truncate_appends_ellipsis_by_char_count() {
        let truncated = truncate("Dr. Strangelove or: How I Learned to Stop Worrying", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }
}
