use serde::{Deserialize, Serialize};

/// One movie as it appears in list screens.
///
/// The record flows through the state machine untouched; only the view
/// decides which fields to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Release date as `YYYY-MM-DD`; empty when unknown.
    #[serde(default)]
    pub release_date: String,
    /// Average rating on a 0..=10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Popularity score used to order the list.
    #[serde(default)]
    pub popularity: f64,
}

impl MovieSummary {
    /// Release year, when the release date carries one.
    pub fn year(&self) -> Option<&str> {
        let year = self.release_date.get(..4)?;
        year.chars().all(|ch| ch.is_ascii_digit()).then_some(year)
    }
}
