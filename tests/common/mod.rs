//! Shared test utilities: scripted use case and domain fixtures.

#![allow(dead_code, unused_imports)]

use futures::channel::mpsc::{self, UnboundedSender};
use marquee::domain::{CustomMessage, GetPopularMovies, MovieListStream, MovieSummary};
use parking_lot::Mutex;
use std::sync::Arc;

pub type Feed = UnboundedSender<Result<Vec<MovieSummary>, CustomMessage>>;

/// Use case whose emissions are driven by the test.
///
/// Every `invoke` opens a fresh channel-backed subscription; the test
/// feeds values through the matching sender and closes it by dropping.
pub struct ScriptedMovies {
    feeds: Mutex<Vec<Feed>>,
}

impl ScriptedMovies {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            feeds: Mutex::new(Vec::new()),
        })
    }

    /// Sender driving the most recently opened subscription.
    ///
    /// Panics when no subscription exists yet; wait for the `Loading`
    /// state first so the fetch task has had a chance to subscribe.
    pub fn feed(&self) -> Feed {
        self.feeds
            .lock()
            .last()
            .cloned()
            .expect("no subscription opened yet")
    }

    /// Sender for the `index`-th subscription, in open order.
    pub fn feed_at(&self, index: usize) -> Feed {
        self.feeds.lock()[index].clone()
    }

    pub fn subscriptions(&self) -> usize {
        self.feeds.lock().len()
    }

    /// Drops every retained sender so open subscriptions see end-of-stream
    /// (the retained clones would otherwise keep the channels alive).
    pub fn drop_feeds(&self) {
        self.feeds.lock().clear();
    }
}

impl GetPopularMovies for ScriptedMovies {
    fn invoke(&self) -> MovieListStream {
        let (tx, rx) = mpsc::unbounded();
        self.feeds.lock().push(tx);
        Box::pin(rx)
    }
}

pub fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        overview: format!("Overview of {title}."),
        release_date: "2020-01-01".to_string(),
        vote_average: 7.5,
        popularity: 50.0,
    }
}
