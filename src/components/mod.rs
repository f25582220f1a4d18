//! The components module contains all shared components for our app.

mod app;
mod find_movie;
mod icons;
mod movie_card;
mod movies_list;

pub use app::*;
pub use find_movie::*;
pub use icons::*;
pub use movie_card::*;
pub use movies_list::*;
