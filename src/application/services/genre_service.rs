use crate::domain::{
    entities::{Genre, GenrePatch},
    repositories::GenreRepository,
};
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

pub struct GenreService {
    repo: Arc<dyn GenreRepository>,
}

impl GenreService {
    pub fn new(repo: Arc<dyn GenreRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_one(&self, id: i32) -> AppResult<Genre> {
        self.repo
            .get_one(id)
            .await?
            .ok_or(AppError::GenreNotFound(id))
    }

    pub async fn get_all(&self) -> AppResult<Vec<Genre>> {
        self.repo.get_all().await
    }

    pub async fn update(&self, genre: &Genre) -> AppResult<()> {
        log::debug!("Updating genre {}", genre.id);
        self.repo.update(genre).await
    }

    pub async fn partially_update(&self, patch: GenrePatch) -> AppResult<()> {
        let mut genre = self.get_one(patch.id).await?;
        patch.apply_to(&mut genre);
        self.repo.update(&genre).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        log::debug!("Deleting genre {}", id);
        self.repo.delete(id).await
    }
}
