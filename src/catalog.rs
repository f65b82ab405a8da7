//! Use case backed by a local movie catalog.
//!
//! Networking is deliberately out of scope; the data layer is a TOML
//! catalog file (or the bundled sample list) replayed through the same
//! async stream contract a remote source would use.

use crate::domain::{CustomMessage, GetPopularMovies, MovieListStream, MovieSummary};
use futures::stream;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub struct CatalogMovies {
    source: CatalogSource,
}

#[derive(Clone)]
enum CatalogSource {
    Bundled,
    File(PathBuf),
}

/// On-disk shape: a list of `[[movies]]` tables.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    movies: Vec<MovieSummary>,
}

impl CatalogMovies {
    /// Catalog of well-known titles compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            source: CatalogSource::Bundled,
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::File(path.into()),
        }
    }
}

impl GetPopularMovies for CatalogMovies {
    fn invoke(&self) -> MovieListStream {
        let source = self.source.clone();
        // One emission per subscription; the read happens on first poll.
        Box::pin(stream::once(async move { load(&source) }))
    }
}

fn load(source: &CatalogSource) -> Result<Vec<MovieSummary>, CustomMessage> {
    let mut movies = match source {
        CatalogSource::Bundled => bundled_movies(),
        CatalogSource::File(path) => read_catalog(path)?,
    };
    movies.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    Ok(movies)
}

fn read_catalog(path: &Path) -> Result<Vec<MovieSummary>, CustomMessage> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        CustomMessage::new(format!("cannot read catalog {}: {err}", path.display()))
    })?;
    let catalog: CatalogFile = toml::from_str(&raw).map_err(|err| {
        CustomMessage::new(format!("cannot parse catalog {}: {err}", path.display()))
    })?;
    Ok(catalog.movies)
}

fn bundled_movies() -> Vec<MovieSummary> {
    fn movie(
        id: u64,
        title: &str,
        release_date: &str,
        vote_average: f64,
        popularity: f64,
        overview: &str,
    ) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            overview: overview.to_string(),
            release_date: release_date.to_string(),
            vote_average,
            popularity,
        }
    }

    vec![
        movie(
            278,
            "The Shawshank Redemption",
            "1994-09-23",
            8.7,
            96.1,
            "Imprisoned in the 1940s for the double murder of his wife and her \
             lover, upstanding banker Andy Dufresne begins a new life at \
             Shawshank prison.",
        ),
        movie(
            238,
            "The Godfather",
            "1972-03-14",
            8.7,
            110.5,
            "Spanning the years 1945 to 1955, a chronicle of the fictional \
             Italian-American Corleone crime family.",
        ),
        movie(
            155,
            "The Dark Knight",
            "2008-07-16",
            8.5,
            103.2,
            "Batman raises the stakes in his war on crime as the Joker pushes \
             Gotham into anarchy.",
        ),
        movie(
            680,
            "Pulp Fiction",
            "1994-09-10",
            8.5,
            87.4,
            "A burger-loving hit man, his philosophical partner, a drug-addled \
             gangster's moll and a washed-up boxer converge in this sprawling \
             crime caper.",
        ),
        movie(
            27205,
            "Inception",
            "2010-07-15",
            8.4,
            99.8,
            "Cobb, a skilled thief who commits corporate espionage by \
             infiltrating the subconscious of his targets, is offered a chance \
             at redemption.",
        ),
        movie(
            603,
            "The Matrix",
            "1999-03-31",
            8.2,
            92.7,
            "Set in the 22nd century, the story of a computer hacker who joins \
             a group of underground insurgents fighting the vast computers who \
             now rule the earth.",
        ),
        movie(
            550,
            "Fight Club",
            "1999-10-15",
            8.4,
            84.3,
            "A ticking-time-bomb insomniac and a slippery soap salesman \
             channel primal male aggression into a shocking new form of \
             therapy.",
        ),
        movie(
            157336,
            "Interstellar",
            "2014-11-05",
            8.4,
            118.9,
            "The adventures of a group of explorers who make use of a newly \
             discovered wormhole to surpass the limitations on human space \
             travel.",
        ),
        movie(
            129,
            "Spirited Away",
            "2001-07-20",
            8.5,
            89.6,
            "A young girl, Chihiro, becomes trapped in a strange new world of \
             spirits. When her parents undergo a mysterious transformation, \
             she must call upon the courage she never knew she had.",
        ),
        movie(
            496243,
            "Parasite",
            "2019-05-30",
            8.5,
            81.2,
            "All unemployed, Ki-taek's family takes peculiar interest in the \
             wealthy and glamorous Parks for their livelihood until they get \
             entangled in an unexpected incident.",
        ),
    ]
}
