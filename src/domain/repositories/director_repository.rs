use crate::domain::entities::Director;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence boundary for directors. Storage and querying live behind an
/// implementation of this trait; the service layer only consumes it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorRepository: Send + Sync {
    async fn get_one(&self, id: i32) -> AppResult<Option<Director>>;
    async fn get_all(&self) -> AppResult<Vec<Director>>;
    async fn update(&self, director: &Director) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}
