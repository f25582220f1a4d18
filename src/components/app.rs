use crate::api::{MovieList, MovieRecord, OmdbClient};
use crate::components::{FindMovie, MoviesList};
use crate::config::LookupConfig;
use dioxus::prelude::*;

/// Root container: owns the accumulated list, the query and the staged
/// preview, and hands them to the form.
#[component]
pub fn AppShell() -> Element {
    let movies = use_signal(MovieList::new);
    let query = use_signal(String::new);
    let staged = use_signal(|| None::<MovieRecord>);

    use_context_provider(|| OmdbClient::new(LookupConfig::from_build_env()));

    let listed: Vec<MovieRecord> = movies.read().iter().cloned().collect();

    rsx! {
        div { class: "page",
            div { class: "page-content",
                MoviesList { movies: listed }
            }

            div { class: "sidebar",
                FindMovie { query, staged, movies }
            }
        }
    }
}
