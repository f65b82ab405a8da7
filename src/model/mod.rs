//! Screen state models: the bridge between asynchronous, fallible data
//! sources and an always-available current state the view can observe.

mod collect;
mod dispose;

pub use collect::collect_latest;
pub use dispose::DisposeToken;

use crate::domain::{as_result, CustomMessage, FetchResult, GetPopularMovies, MovieSummary};
use parking_lot::Mutex;
use std::future::ready;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What the movies screen should render.
///
/// Exactly one variant is active at a time; transitions are driven solely
/// by fetch results arriving from the use case.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MoviesState {
    #[default]
    Idle,
    Loading,
    Success(Vec<MovieSummary>),
    Error(CustomMessage),
}

/// State holder for the popular-movies screen.
///
/// Owns the fetch tasks it spawns and the watch cell it publishes into.
/// The view holds only a read handle on the cell; the model is the single
/// logical writer.
pub struct MoviesScreenModel {
    use_case: Arc<dyn GetPopularMovies>,
    runtime: Handle,
    state_tx: watch::Sender<MoviesState>,
    dispose: DisposeToken,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl MoviesScreenModel {
    /// Dependencies are injected here; there is no global accessor.
    pub fn new(use_case: Arc<dyn GetPopularMovies>, runtime: Handle) -> Self {
        let (state_tx, _) = watch::channel(MoviesState::Idle);
        Self {
            use_case,
            runtime,
            state_tx,
            dispose: DisposeToken::new(),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Starts a fetch of the popular-movies list.
    ///
    /// Each call opens a fresh subscription against the use case; calls
    /// are not de-duplicated, so two live subscriptions interleave with
    /// last-write-wins on the state cell. Retry after an error is exactly
    /// another call to this method. After disposal this is a no-op.
    pub fn on_launch(&self) {
        if self.dispose.is_cancelled() {
            tracing::debug!("launch ignored, model already disposed");
            return;
        }

        let use_case = Arc::clone(&self.use_case);
        let state_tx = self.state_tx.clone();
        let token = self.dispose.clone();
        let task = self.runtime.spawn(async move {
            let results = as_result(use_case.invoke());
            collect_latest(results, token, move |result| {
                let next = match result {
                    FetchResult::Idle => MoviesState::Idle,
                    FetchResult::Loading => MoviesState::Loading,
                    FetchResult::Success(movies) => MoviesState::Success(movies),
                    FetchResult::Error(err) => {
                        tracing::warn!(error = %err, "popular movies fetch failed");
                        MoviesState::Error(err)
                    }
                };
                // send_replace publishes even with zero subscribers.
                state_tx.send_replace(next);
                ready(())
            })
            .await;
            tracing::debug!("popular movies subscription ended");
        });
        self.tasks.lock().push(task);
    }

    /// Read handle on the state cell.
    ///
    /// New subscribers see the current value immediately, then every later
    /// publish. Safe to call from any thread.
    pub fn state(&self) -> watch::Receiver<MoviesState> {
        self.state_tx.subscribe()
    }

    /// True while any spawned fetch task is still live.
    pub fn is_fetching(&self) -> bool {
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        !tasks.is_empty()
    }

    /// Cancels all outstanding fetches.
    ///
    /// Cancellation is cooperative: tasks notice at their next suspension
    /// point and exit without publishing again. The model cannot be
    /// relaunched afterwards.
    pub fn on_dispose(&self) {
        self.dispose.cancel();
    }
}
