use crate::domain::message::CustomMessage;
use crate::domain::model::MovieSummary;
use futures::stream::BoxStream;

/// Stream of movie-list emissions produced by a use case.
///
/// Lazy and possibly long-lived: an implementation may emit a single list
/// and end, or keep emitting refreshed lists until the subscriber goes
/// away.
pub type MovieListStream = BoxStream<'static, Result<Vec<MovieSummary>, CustomMessage>>;

/// Domain operation yielding the popular-movies list.
///
/// Screen models hold this behind `Arc<dyn GetPopularMovies>` and call
/// `invoke` once per subscription. Building the stream must not perform
/// any work; everything happens when the stream is polled.
pub trait GetPopularMovies: Send + Sync {
    fn invoke(&self) -> MovieListStream;
}
