use crate::ui::about;
use crate::ui::app::App;
use crate::ui::detail::{self, DetailOverlayState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home;
use crate::ui::layout::layout_regions;
use crate::ui::nav::TabId;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Assembles the screen tree: scaffold, active destination, overlay host.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let state = app.movies_state();
    frame.render_widget(Header::new().widget(app.is_fetching(), &state), header);

    frame.render_widget(Clear, body);
    match app.active_tab() {
        TabId::Home => home::render(frame, body, app),
        TabId::About => about::render(frame, body),
    }

    frame.render_widget(Footer::new().widget(app.nav(), footer), footer);

    if let DetailOverlayState::Visible { movie } = app.detail() {
        detail::render(frame, movie);
    }
}
