//! marquee: a terminal client for browsing popular movies.
//!
//! The crate is split the same way the screens are: `domain` holds the
//! movie records and the fetch-result stream contract, `model` holds the
//! screen state machine that turns those streams into something a view can
//! observe, and `ui` holds the ratatui composition that renders it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod model;
pub mod trace;
pub mod ui;
