//! Domain types shared between the data layer and the screen models.

mod message;
mod model;
mod result;
mod usecase;

pub use message::CustomMessage;
pub use model::MovieSummary;
pub use result::{as_result, FetchResult};
pub use usecase::{GetPopularMovies, MovieListStream};
