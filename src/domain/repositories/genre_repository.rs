use crate::domain::entities::Genre;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn get_one(&self, id: i32) -> AppResult<Option<Genre>>;
    async fn get_all(&self) -> AppResult<Vec<Genre>>;
    async fn update(&self, genre: &Genre) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}
