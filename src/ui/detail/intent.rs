use crate::domain::MovieSummary;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailIntent {
    Open { movie: MovieSummary },
    Close,
}

impl Intent for DetailIntent {}
