use serde::{Deserialize, Serialize};

/// Shown in place of a poster when OMDb has none.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/360x270.png?text=no%20preview";

/// Sentinel OMDb uses for missing fields.
const NOT_AVAILABLE: &str = "N/A";

const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// Raw movie payload as OMDb returns it. Only the fields the app renders are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieData {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

/// A lookup either matched a movie or the service said it has none.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "Response")]
pub enum LookupOutcome {
    #[serde(rename = "True")]
    Found(MovieData),
    #[serde(rename = "False")]
    NotFound {
        #[serde(rename = "Error", default)]
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub imdb_url: String,
    pub imdb_id: String,
}

impl From<MovieData> for MovieRecord {
    fn from(data: MovieData) -> Self {
        let image_url = if data.poster == NOT_AVAILABLE {
            PLACEHOLDER_IMAGE_URL.to_string()
        } else {
            data.poster
        };

        Self {
            title: data.title,
            description: data.plot,
            image_url,
            imdb_url: format!("{IMDB_TITLE_URL}{}", data.imdb_id),
            imdb_id: data.imdb_id,
        }
    }
}

/// Session list of confirmed movies, unique by IMDb id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieList {
    movies: Vec<MovieRecord>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `movie` unless a record with the same IMDb id is already present.
    /// Returns whether the list changed.
    pub fn insert_if_absent(&mut self, movie: MovieRecord) -> bool {
        if self.contains(&movie.imdb_id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|movie| movie.imdb_id == imdb_id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }
}
