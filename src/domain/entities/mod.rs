mod director;
mod genre;
mod movie;

pub use director::{Director, DirectorPatch};
pub use genre::{Genre, GenrePatch};
pub use movie::{Movie, MoviePatch};
