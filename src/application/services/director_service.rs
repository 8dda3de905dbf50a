use crate::domain::{
    entities::{Director, DirectorPatch},
    repositories::DirectorRepository,
};
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

pub struct DirectorService {
    repo: Arc<dyn DirectorRepository>,
}

impl DirectorService {
    pub fn new(repo: Arc<dyn DirectorRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_one(&self, id: i32) -> AppResult<Director> {
        self.repo
            .get_one(id)
            .await?
            .ok_or(AppError::DirectorNotFound(id))
    }

    pub async fn get_all(&self) -> AppResult<Vec<Director>> {
        self.repo.get_all().await
    }

    /// Full replace. The record is handed to the repository as-is.
    pub async fn update(&self, director: &Director) -> AppResult<()> {
        log::debug!("Updating director {}", director.id);
        self.repo.update(director).await
    }

    /// One read before one write: fetch the current record, overlay the
    /// fields present in the patch, write the merged record back.
    pub async fn partially_update(&self, patch: DirectorPatch) -> AppResult<()> {
        let mut director = self.get_one(patch.id).await?;
        patch.apply_to(&mut director);
        self.repo.update(&director).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        log::debug!("Deleting director {}", id);
        self.repo.delete(id).await
    }
}
