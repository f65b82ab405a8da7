//! Unidirectional data-flow primitives for navigator-local state.
//!
//! Screen chrome (the tab bar, overlays) keeps its state in small
//! immutable values: user actions become intents, and a pure reducer maps
//! `(state, intent)` to the next state. Asynchronous screen data does not
//! live here; that belongs to a screen model and its watch cell.

/// Marker trait for navigator-local state values.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user/system actions fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`, no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
