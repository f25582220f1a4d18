use crate::api::MovieRecord;
use crate::components::Icon;
use dioxus::prelude::*;

#[component]
pub fn MovieCard(movie: MovieRecord) -> Element {
    rsx! {
        div { class: "movie-card", "data-cy": "movieCard",
            div { class: "movie-card__poster",
                img {
                    "data-cy": "movieCardImage",
                    src: "{movie.image_url}",
                    alt: "Film logo",
                    loading: "lazy",
                }
            }
            div { class: "movie-card__body",
                div { class: "movie-card__header",
                    Icon { name: "film".to_string(), class: "movie-card__icon".to_string() }
                    p { class: "movie-card__title", "data-cy": "movieTitle", "{movie.title}" }
                }
                p { class: "movie-card__description", "data-cy": "movieDescription",
                    "{movie.description}"
                }
                a {
                    class: "movie-card__link",
                    href: "{movie.imdb_url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "data-cy": "movieURL",
                    "IMDb"
                    Icon {
                        name: "external-link".to_string(),
                        class: "movie-card__link-icon".to_string(),
                    }
                }
            }
        }
    }
}
