use crate::api::MovieRecord;
use crate::components::MovieCard;
use dioxus::prelude::*;

#[component]
pub fn MoviesList(movies: Vec<MovieRecord>) -> Element {
    rsx! {
        div { class: "movies",
            for movie in movies {
                MovieCard { key: "{movie.imdb_id}", movie: movie.clone() }
            }
        }
    }
}
