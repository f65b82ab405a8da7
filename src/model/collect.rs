use crate::model::dispose::DisposeToken;
use futures::stream::{Stream, StreamExt};
use std::future::Future;
use std::pin::{pin, Pin};

/// Drives `stream` to completion, running `handler` per item with
/// latest-wins semantics.
///
/// An item arriving while the previous handler future is still pending
/// drops that future on the floor and starts a fresh one; items are never
/// queued. Cancelling `token` stops the collection, including any
/// in-flight handler. Once the upstream ends, the last in-flight handler
/// is allowed to finish.
pub async fn collect_latest<S, T, F, Fut>(stream: S, token: DisposeToken, mut handler: F)
where
    S: Stream<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut stream = pin!(stream.fuse());
    let mut in_flight: Option<Pin<Box<Fut>>> = None;

    loop {
        tokio::select! {
            // Ordering matters: cancellation beats a new item, and a new
            // item beats progress on the handler it supersedes.
            biased;
            _ = token.wait() => return,
            item = stream.next() => match item {
                Some(item) => in_flight = Some(Box::pin(handler(item))),
                None => break,
            },
            () = async { in_flight.as_mut().expect("guarded by arm condition").await },
                if in_flight.is_some() =>
            {
                in_flight = None;
            }
        }
    }

    if let Some(last) = in_flight {
        tokio::select! {
            biased;
            _ = token.wait() => {}
            () = last => {}
        }
    }
}
