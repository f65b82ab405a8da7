use crate::ui::app::App;
use crate::ui::nav::TabId;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The overlay captures all input while visible.
    if app.detail_visible() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
            app.close_detail();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        KeyCode::Char('1') => {
            app.select_tab(TabId::Home);
            return;
        }
        KeyCode::Char('2') => {
            app.select_tab(TabId::About);
            return;
        }
        _ => {}
    }

    // List keys only act on the movies destination.
    if app.active_tab() == TabId::Home {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
            KeyCode::Enter => app.open_detail(),
            KeyCode::Char('r') => app.reload(),
            _ => {}
        }
    }
}
