use crate::model::{MoviesScreenModel, MoviesState};
use crate::ui::detail::{DetailIntent, DetailOverlayState, DetailReducer};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, TabId};
use std::sync::Arc;
use tokio::sync::watch;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level view state.
///
/// Holds only a read handle on the screen model's state cell; every
/// mutation here is navigator-local (tabs, cursor, overlay, quit flag).
pub struct App {
    should_quit: bool,
    spinner_phase: usize,
    cursor: usize,
    nav: NavState,
    detail: DetailOverlayState,
    model: Arc<MoviesScreenModel>,
    state_rx: watch::Receiver<MoviesState>,
}

impl App {
    pub fn new(model: Arc<MoviesScreenModel>, initial_tab: TabId) -> Self {
        let state_rx = model.state();
        Self {
            should_quit: false,
            spinner_phase: 0,
            cursor: 0,
            nav: NavState {
                active: initial_tab,
            },
            detail: DetailOverlayState::default(),
            model,
            state_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.spinner_phase = self.spinner_phase.wrapping_add(1);
    }

    pub fn spinner_phase(&self) -> usize {
        self.spinner_phase
    }

    /// Snapshot of the observed movies state. Cloned per frame; the cell
    /// itself stays with the model.
    pub fn movies_state(&self) -> MoviesState {
        self.state_rx.borrow().clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.model.is_fetching()
    }

    /// Re-invokes the fetch; this is the only retry mechanism.
    pub fn reload(&self) {
        self.model.on_launch();
    }

    // -- Tab navigator --------------------------------------------------

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn active_tab(&self) -> TabId {
        self.nav.active
    }

    pub fn select_tab(&mut self, tab: TabId) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Select(tab));
    }

    pub fn next_tab(&mut self) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Next);
    }

    pub fn prev_tab(&mut self) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Prev);
    }

    // -- Movie list cursor ----------------------------------------------

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = match &*self.state_rx.borrow() {
            MoviesState::Success(movies) => movies.len(),
            _ => 0,
        };
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    // -- Detail overlay --------------------------------------------------

    pub fn detail(&self) -> &DetailOverlayState {
        &self.detail
    }

    pub fn detail_visible(&self) -> bool {
        self.detail.is_visible()
    }

    /// Opens the overlay for the movie under the cursor, if any.
    pub fn open_detail(&mut self) {
        let movie = match &*self.state_rx.borrow() {
            MoviesState::Success(movies) => movies.get(self.cursor).cloned(),
            _ => None,
        };
        if let Some(movie) = movie {
            dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Open { movie });
        }
    }

    pub fn close_detail(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Close);
    }
}
