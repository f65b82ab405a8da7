use crate::ui::mvi::Intent;
use crate::ui::nav::state::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Jump straight to a destination (number keys).
    Select(TabId),
    /// Cycle forward through the bar, wrapping.
    Next,
    /// Cycle backward through the bar, wrapping.
    Prev,
}

impl Intent for NavIntent {}
