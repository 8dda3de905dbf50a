use crate::domain::entities::Movie;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn get_one(&self, id: i32) -> AppResult<Option<Movie>>;
    async fn get_all(&self) -> AppResult<Vec<Movie>>;
    async fn update(&self, movie: &Movie) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}
