use crate::ui::nav::{NavState, TabId};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TAB_SELECTED};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom navigation bar: one item per destination, plus key hints and
/// the version on the right edge.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, nav: &NavState, area: Rect) -> Paragraph<'static> {
        let dim_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = Vec::new();
        for (index, tab) in TabId::ALL.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            let label = format!(" {} {} ", index + 1, tab.title());
            let style = if tab == nav.active {
                Style::default().fg(TAB_SELECTED).add_modifier(Modifier::BOLD)
            } else {
                dim_style
            };
            spans.push(Span::styled(label, style));
        }

        let hints = "  Tab: switch │ Enter: details │ r: reload │ q: quit";
        spans.push(Span::styled(hints, dim_style));

        let version = format!("v{} ", VERSION);
        // Pad by char count, not byte count, so the version hugs the edge.
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), dim_style));
        spans.push(Span::styled(version, dim_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
