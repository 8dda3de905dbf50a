use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Director not found: {0}")]
    DirectorNotFound(i32),

    #[error("Genre not found: {0}")]
    GenreNotFound(i32),

    #[error("Movie not found: {0}")]
    MovieNotFound(i32),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
