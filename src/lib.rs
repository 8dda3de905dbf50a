pub mod application;
pub mod domain;
pub mod shared;

pub use application::services::{DirectorService, GenreService, MovieService};
pub use domain::entities::{Director, DirectorPatch, Genre, GenrePatch, Movie, MoviePatch};
pub use domain::repositories::{DirectorRepository, GenreRepository, MovieRepository};
pub use shared::errors::{AppError, AppResult};
