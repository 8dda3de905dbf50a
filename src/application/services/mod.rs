mod director_service;
mod genre_service;
mod movie_service;

pub use director_service::DirectorService;
pub use genre_service::GenreService;
pub use movie_service::MovieService;
