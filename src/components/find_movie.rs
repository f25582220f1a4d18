use crate::api::{MovieList, MovieLookup, MovieRecord, OmdbClient};
use crate::components::{Icon, MovieCard};
use crate::state::{add_staged, AddOutcome, SearchResolution, SearchStatus};
use dioxus::prelude::*;

const NOT_FOUND_MESSAGE: &str = "Can't find a movie with such a title";

#[component]
pub fn FindMovie(
    mut query: Signal<String>,
    mut staged: Signal<Option<MovieRecord>>,
    mut movies: Signal<MovieList>,
) -> Element {
    let client = use_context::<OmdbClient>();
    let mut status = use_signal(SearchStatus::default);

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let title = query();
        let Some(generation) = status.write().begin(&title) else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            let result = client.lookup(&title).await;
            let resolution = status.write().finish(generation, result);
            if let SearchResolution::Found(movie) = resolution {
                staged.set(Some(movie));
            }
        });
    };

    let on_add = move |evt: MouseEvent| {
        evt.prevent_default();
        let outcome = add_staged(&mut movies.write(), &mut staged.write(), &mut query.write());
        match outcome {
            AddOutcome::Added => tracing::debug!(count = movies.peek().len(), "movie added"),
            AddOutcome::Duplicate => tracing::debug!("movie already in list"),
            AddOutcome::NothingStaged => {}
        }
    };

    let current = status();
    let preview = staged();
    let input_class = if current.error { "input is-danger" } else { "input" };
    let search_class = if current.loading {
        "button is-light is-loading"
    } else {
        "button is-light"
    };

    rsx! {
        form { class: "find-movie", onsubmit: on_search,
            div { class: "field",
                label { class: "label", r#for: "movie-title", "Movie title" }

                div { class: "control",
                    Icon { name: "search".to_string(), class: "control__icon".to_string() }
                    input {
                        "data-cy": "titleField",
                        r#type: "text",
                        id: "movie-title",
                        placeholder: "Enter a title to search",
                        class: "{input_class}",
                        value: query,
                        oninput: move |e| {
                            query.set(e.value());
                            status.write().clear_error();
                        },
                    }
                }

                if current.error {
                    p { class: "help is-danger", "data-cy": "errorMessage", "{NOT_FOUND_MESSAGE}" }
                }
            }

            div { class: "field is-grouped",
                div { class: "control",
                    button {
                        "data-cy": "searchButton",
                        r#type: "submit",
                        class: "{search_class}",
                        disabled: query().is_empty(),
                        if current.loading {
                            Icon { name: "loader".to_string(), class: "button__icon".to_string() }
                        }
                        "Find a movie"
                    }
                }

                if preview.is_some() {
                    div { class: "control",
                        button {
                            "data-cy": "addButton",
                            r#type: "button",
                            class: "button is-primary",
                            onclick: on_add,
                            Icon { name: "plus".to_string(), class: "button__icon".to_string() }
                            "Add to the list"
                        }
                    }
                }
            }
        }

        if let Some(movie) = preview {
            div { class: "container", "data-cy": "previewContainer",
                h2 { class: "title", "Preview" }
                MovieCard { movie }
            }
        }
    }
}
