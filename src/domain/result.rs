use crate::domain::message::CustomMessage;
use futures::stream::{self, Stream, StreamExt};

/// Lifecycle of an asynchronous fetch.
///
/// `Idle` is the pre-start sentinel; the adapter below never emits it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult<T> {
    Idle,
    Loading,
    Success(T),
    Error(CustomMessage),
}

/// Adapts a fallible stream into a stream of [`FetchResult`]s.
///
/// Emits `Loading` before the first underlying emission, then `Success`
/// per value and `Error` per failure. Failures become items, never a
/// stream fault, so consumers can keep a screen alive across bad fetches.
/// The upstream stays lazy until the returned stream is polled past the
/// `Loading` item.
pub fn as_result<T, S>(upstream: S) -> impl Stream<Item = FetchResult<T>>
where
    S: Stream<Item = Result<T, CustomMessage>>,
{
    stream::iter([FetchResult::Loading]).chain(upstream.map(|item| match item {
        Ok(value) => FetchResult::Success(value),
        Err(err) => FetchResult::Error(err),
    }))
}
