mod common;

use common::movie;
use marquee::ui::detail::{DetailIntent, DetailOverlayState, DetailReducer};
use marquee::ui::mvi::Reducer;

#[test]
fn open_shows_the_movie() {
    let state = DetailReducer::reduce(
        DetailOverlayState::Hidden,
        DetailIntent::Open {
            movie: movie(1, "Heat"),
        },
    );
    assert!(state.is_visible());
    assert_eq!(
        state,
        DetailOverlayState::Visible {
            movie: movie(1, "Heat")
        }
    );
}

#[test]
fn open_replaces_a_visible_movie() {
    let state = DetailReducer::reduce(
        DetailOverlayState::Visible {
            movie: movie(1, "Heat"),
        },
        DetailIntent::Open {
            movie: movie(2, "Ran"),
        },
    );
    assert_eq!(
        state,
        DetailOverlayState::Visible {
            movie: movie(2, "Ran")
        }
    );
}

#[test]
fn close_hides_the_overlay() {
    let state = DetailReducer::reduce(
        DetailOverlayState::Visible {
            movie: movie(1, "Heat"),
        },
        DetailIntent::Close,
    );
    assert!(!state.is_visible());
}
