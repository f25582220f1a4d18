//! UI-independent state transitions for the search-and-add form.

use crate::api::{LookupOutcome, MovieList, MovieRecord};
use crate::error::LookupError;

/// Loading and error flags of the form, plus the sequence number of the most
/// recent submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatus {
    pub loading: bool,
    pub error: bool,
    generation: u64,
}

/// What a finished lookup means for the form.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResolution {
    /// A record to stage as the preview.
    Found(MovieRecord),
    /// The error flag was raised.
    Failed,
    /// A newer submission was issued in the meantime; nothing was applied.
    Stale,
}

impl SearchStatus {
    /// Called on every keystroke in the title field.
    pub fn clear_error(&mut self) {
        self.error = false;
    }

    /// Starts a submission. Returns its generation, or `None` when the query is
    /// empty and the submit action is unavailable.
    pub fn begin(&mut self, query: &str) -> Option<u64> {
        if query.is_empty() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.error = false;
        Some(self.generation)
    }

    /// Applies the result of the submission tagged `generation`. Results of
    /// superseded submissions are dropped so the latest one always wins.
    pub fn finish(
        &mut self,
        generation: u64,
        result: Result<LookupOutcome, LookupError>,
    ) -> SearchResolution {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "dropping stale lookup");
            return SearchResolution::Stale;
        }
        self.loading = false;

        match result {
            Ok(LookupOutcome::Found(data)) => SearchResolution::Found(MovieRecord::from(data)),
            Ok(LookupOutcome::NotFound { .. }) => {
                self.error = true;
                SearchResolution::Failed
            }
            Err(err) => {
                tracing::warn!(error = %err, "movie lookup failed");
                self.error = true;
                SearchResolution::Failed
            }
        }
    }
}

/// Result of pressing "Add to the list".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
    NothingStaged,
}

/// Moves the staged record into `list` unless its IMDb id is already there.
/// The query and the staged record are cleared either way.
pub fn add_staged(
    list: &mut MovieList,
    staged: &mut Option<MovieRecord>,
    query: &mut String,
) -> AddOutcome {
    query.clear();

    match staged.take() {
        None => AddOutcome::NothingStaged,
        Some(movie) => {
            if list.insert_if_absent(movie) {
                AddOutcome::Added
            } else {
                AddOutcome::Duplicate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{parse_lookup_body, MovieData, MovieLookup, PLACEHOLDER_IMAGE_URL};
    use std::collections::HashMap;

    /// Serves canned OMDb bodies keyed by title.
    struct FakeOmdb {
        bodies: HashMap<&'static str, &'static str>,
    }

    impl FakeOmdb {
        fn new() -> Self {
            let mut bodies = HashMap::new();
            bodies.insert(
                "Inception",
                r#"{"Title":"Inception","Plot":"A thief who steals corporate secrets.","Poster":"N/A","imdbID":"tt1375666","Response":"True"}"#,
            );
            bodies.insert(
                "incepti0n",
                r#"{"Response":"False","Error":"Movie not found!"}"#,
            );
            bodies.insert("broken", "not json at all");
            Self { bodies }
        }
    }

    impl MovieLookup for FakeOmdb {
        async fn lookup(&self, title: &str) -> Result<LookupOutcome, LookupError> {
            let body = self.bodies.get(title).copied().unwrap_or("{}");
            parse_lookup_body(body)
        }
    }

    #[derive(Default)]
    struct Form {
        status: SearchStatus,
        query: String,
        staged: Option<MovieRecord>,
        list: MovieList,
    }

    impl Form {
        async fn submit(&mut self, lookup: &impl MovieLookup) {
            let Some(generation) = self.status.begin(&self.query) else {
                return;
            };
            assert!(self.status.loading);
            let result = lookup.lookup(&self.query).await;
            if let SearchResolution::Found(movie) = self.status.finish(generation, result) {
                self.staged = Some(movie);
            }
        }

        fn add(&mut self) -> AddOutcome {
            add_staged(&mut self.list, &mut self.staged, &mut self.query)
        }
    }

    fn movie(id: &str) -> MovieRecord {
        MovieRecord::from(MovieData {
            title: format!("Movie {id}"),
            plot: String::new(),
            poster: "https://example.org/poster.jpg".to_string(),
            imdb_id: id.to_string(),
        })
    }

    #[test]
    fn empty_query_cannot_be_submitted() {
        let mut status = SearchStatus::default();
        assert_eq!(status.begin(""), None);
        assert!(!status.loading);
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut status = SearchStatus::default();
        let generation = status.begin("x").unwrap();
        status.finish(generation, parse_lookup_body("{}"));
        assert!(status.error);

        status.begin("y").unwrap();
        assert!(!status.error);
        assert!(status.loading);
    }

    #[test]
    fn editing_clears_error() {
        let mut status = SearchStatus {
            error: true,
            ..Default::default()
        };
        status.clear_error();
        assert!(!status.error);
    }

    #[tokio::test]
    async fn typo_sets_error_and_leaves_state_alone() {
        let fake = FakeOmdb::new();
        let mut form = Form {
            query: "incepti0n".to_string(),
            ..Default::default()
        };

        form.submit(&fake).await;

        assert!(form.status.error);
        assert!(!form.status.loading);
        assert!(form.staged.is_none());
        assert!(form.list.is_empty());
    }

    #[tokio::test]
    async fn not_found_keeps_earlier_preview() {
        let fake = FakeOmdb::new();
        let mut form = Form {
            query: "Inception".to_string(),
            ..Default::default()
        };
        form.submit(&fake).await;

        form.query = "incepti0n".to_string();
        form.submit(&fake).await;

        assert!(form.status.error);
        assert_eq!(form.staged.as_ref().map(|m| m.imdb_id.as_str()), Some("tt1375666"));
    }

    #[tokio::test]
    async fn malformed_response_sets_error() {
        let fake = FakeOmdb::new();
        let mut form = Form {
            query: "broken".to_string(),
            ..Default::default()
        };

        form.submit(&fake).await;

        assert!(form.status.error);
        assert!(!form.status.loading);
    }

    #[tokio::test]
    async fn inception_is_staged_with_placeholder_then_added_once() {
        let fake = FakeOmdb::new();
        let mut form = Form {
            query: "Inception".to_string(),
            ..Default::default()
        };

        form.submit(&fake).await;

        let staged = form.staged.clone().expect("staged preview");
        assert_eq!(staged.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(staged.imdb_id, "tt1375666");
        assert!(!form.status.error);
        assert!(!form.status.loading);

        assert_eq!(form.add(), AddOutcome::Added);
        assert_eq!(form.list.len(), 1);
        assert_eq!(form.list.iter().next().unwrap().imdb_id, "tt1375666");
        assert!(form.staged.is_none());
        assert!(form.query.is_empty());

        form.query = "Inception".to_string();
        form.submit(&fake).await;
        assert_eq!(form.add(), AddOutcome::Duplicate);
        assert_eq!(form.list.len(), 1);
        assert!(form.staged.is_none());
        assert!(form.query.is_empty());
    }

    #[test]
    fn new_movie_is_appended_last() {
        let mut list = MovieList::new();
        list.insert_if_absent(movie("tt1"));
        list.insert_if_absent(movie("tt2"));
        let mut staged = Some(movie("tt3"));
        let mut query = "Movie".to_string();

        assert_eq!(add_staged(&mut list, &mut staged, &mut query), AddOutcome::Added);

        let ids: Vec<&str> = list.iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt1", "tt2", "tt3"]);
    }

    #[test]
    fn add_without_staged_only_clears_query() {
        let mut list = MovieList::new();
        let mut staged = None;
        let mut query = "Heat".to_string();

        assert_eq!(
            add_staged(&mut list, &mut staged, &mut query),
            AddOutcome::NothingStaged
        );
        assert!(list.is_empty());
        assert!(query.is_empty());
    }

    #[test]
    fn stale_completion_does_not_override_newer_submission() {
        let mut status = SearchStatus::default();
        let first = status.begin("Heat").unwrap();
        let second = status.begin("Inception").unwrap();

        let found = Ok(LookupOutcome::Found(MovieData {
            title: "Inception".to_string(),
            plot: String::new(),
            poster: "N/A".to_string(),
            imdb_id: "tt1375666".to_string(),
        }));
        assert!(matches!(status.finish(second, found), SearchResolution::Found(_)));

        let late = parse_lookup_body(r#"{"Response":"False","Error":"Movie not found!"}"#);
        assert_eq!(status.finish(first, late), SearchResolution::Stale);
        assert!(!status.error);
        assert!(!status.loading);
    }

    #[test]
    fn older_completion_keeps_loading_for_pending_newer_one() {
        let mut status = SearchStatus::default();
        let first = status.begin("Heat").unwrap();
        let _second = status.begin("Inception").unwrap();

        let result = parse_lookup_body(r#"{"Response":"False","Error":"Movie not found!"}"#);
        assert_eq!(status.finish(first, result), SearchResolution::Stale);
        assert!(status.loading);
    }
}
