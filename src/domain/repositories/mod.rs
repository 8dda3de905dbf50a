mod director_repository;
mod genre_repository;
mod movie_repository;

pub use director_repository::DirectorRepository;
pub use genre_repository::GenreRepository;
pub use movie_repository::MovieRepository;

#[cfg(test)]
pub use director_repository::MockDirectorRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
