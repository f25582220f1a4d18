mod models;
mod omdb;

pub use models::*;
pub use omdb::*;
