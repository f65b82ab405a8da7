mod common;

use common::{movie, ScriptedMovies};
use marquee::domain::CustomMessage;
use marquee::model::{MoviesScreenModel, MoviesState};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

fn make_model(use_case: &Arc<ScriptedMovies>) -> MoviesScreenModel {
    MoviesScreenModel::new(
        Arc::clone(use_case) as Arc<dyn marquee::domain::GetPopularMovies>,
        Handle::current(),
    )
}

/// Yield until `condition` holds, bounded so a broken invariant fails the
/// test instead of hanging it.
async fn settle(mut condition: impl FnMut() -> bool) {
    for _ in 0..1_000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition did not settle");
}

#[tokio::test]
async fn initial_state_is_idle_before_launch() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);
    assert_eq!(*model.state().borrow(), MoviesState::Idle);
    assert_eq!(use_case.subscriptions(), 0);
}

#[tokio::test]
async fn launch_publishes_loading_then_success() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);
    let mut rx = model.state();

    model.on_launch();
    timeout(WAIT, rx.wait_for(|state| *state == MoviesState::Loading))
        .await
        .expect("loading within deadline")
        .expect("state cell alive");

    use_case.feed().unbounded_send(Ok(vec![])).unwrap();
    let state = timeout(
        WAIT,
        rx.wait_for(|state| matches!(state, MoviesState::Success(_))),
    )
    .await
    .expect("success within deadline")
    .expect("state cell alive");
    assert_eq!(*state, MoviesState::Success(vec![]));
}

#[tokio::test]
async fn upstream_failure_becomes_error_state() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);
    let mut rx = model.state();

    model.on_launch();
    timeout(WAIT, rx.wait_for(|state| *state == MoviesState::Loading))
        .await
        .unwrap()
        .unwrap();

    use_case
        .feed()
        .unbounded_send(Err(CustomMessage::new("network down")))
        .unwrap();
    let state = timeout(
        WAIT,
        rx.wait_for(|state| matches!(state, MoviesState::Error(_))),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(
        *state,
        MoviesState::Error(CustomMessage::new("network down"))
    );
}

#[tokio::test]
async fn emissions_map_deterministically_in_order() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);
    let mut rx = model.state();

    model.on_launch();
    timeout(WAIT, rx.wait_for(|state| *state == MoviesState::Loading))
        .await
        .unwrap()
        .unwrap();

    let first = vec![movie(1, "Heat")];
    use_case.feed().unbounded_send(Ok(first.clone())).unwrap();
    timeout(
        WAIT,
        rx.wait_for(|state| *state == MoviesState::Success(first.clone())),
    )
    .await
    .unwrap()
    .unwrap();

    let second = vec![movie(1, "Heat"), movie(2, "Ran")];
    use_case.feed().unbounded_send(Ok(second.clone())).unwrap();
    timeout(
        WAIT,
        rx.wait_for(|state| *state == MoviesState::Success(second.clone())),
    )
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test(start_paused = true)]
async fn dispose_freezes_the_state_cell() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);
    let mut rx = model.state();

    model.on_launch();
    timeout(WAIT, rx.wait_for(|state| *state == MoviesState::Loading))
        .await
        .unwrap()
        .unwrap();

    let movies = vec![movie(1, "Heat")];
    use_case.feed().unbounded_send(Ok(movies.clone())).unwrap();
    timeout(
        WAIT,
        rx.wait_for(|state| matches!(state, MoviesState::Success(_))),
    )
    .await
    .unwrap()
    .unwrap();

    model.on_dispose();
    settle(|| !model.is_fetching()).await;

    // Upstream keeps emitting; nothing may reach the cell anymore.
    let _ = use_case
        .feed()
        .unbounded_send(Err(CustomMessage::new("late failure")));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(*model.state().borrow(), MoviesState::Success(movies));
}

#[tokio::test]
async fn launch_after_dispose_is_a_no_op() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);

    model.on_dispose();
    model.on_launch();
    settle(|| !model.is_fetching()).await;

    assert_eq!(use_case.subscriptions(), 0);
    assert_eq!(*model.state().borrow(), MoviesState::Idle);
}

#[tokio::test]
async fn double_launch_keeps_both_subscriptions_live() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);
    let mut rx = model.state();

    model.on_launch();
    timeout(WAIT, rx.wait_for(|state| *state == MoviesState::Loading))
        .await
        .unwrap()
        .unwrap();
    model.on_launch();
    settle(|| use_case.subscriptions() == 2).await;

    // Both subscriptions write to the same cell; whichever emits last
    // wins. This mirrors the unguarded re-launch behavior on purpose.
    let first = vec![movie(1, "Heat")];
    use_case.feed_at(0).unbounded_send(Ok(first.clone())).unwrap();
    timeout(
        WAIT,
        rx.wait_for(|state| *state == MoviesState::Success(first.clone())),
    )
    .await
    .unwrap()
    .unwrap();

    let second = vec![movie(2, "Ran")];
    use_case.feed_at(1).unbounded_send(Ok(second.clone())).unwrap();
    timeout(
        WAIT,
        rx.wait_for(|state| *state == MoviesState::Success(second.clone())),
    )
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test]
async fn is_fetching_tracks_task_lifetime() {
    let use_case = ScriptedMovies::new();
    let model = make_model(&use_case);
    let mut rx = model.state();

    assert!(!model.is_fetching());
    model.on_launch();
    timeout(WAIT, rx.wait_for(|state| *state == MoviesState::Loading))
        .await
        .unwrap()
        .unwrap();
    assert!(model.is_fetching());

    // Ending the upstream lets the fetch task finish on its own.
    let feed = use_case.feed();
    feed.unbounded_send(Ok(vec![])).unwrap();
    drop(feed);
    use_case.drop_feeds();
    settle(|| !model.is_fetching()).await;
}
