use crate::domain::MovieSummary;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailOverlayState {
    #[default]
    Hidden,
    Visible {
        movie: MovieSummary,
    },
}

impl UiState for DetailOverlayState {}

impl DetailOverlayState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
