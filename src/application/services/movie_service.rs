use crate::domain::{
    entities::{Movie, MoviePatch},
    repositories::MovieRepository,
};
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

pub struct MovieService {
    repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_one(&self, id: i32) -> AppResult<Movie> {
        self.repo
            .get_one(id)
            .await?
            .ok_or(AppError::MovieNotFound(id))
    }

    pub async fn get_all(&self) -> AppResult<Vec<Movie>> {
        self.repo.get_all().await
    }

    /// Full replace. `genre_id` / `director_id` are written as given,
    /// referential checks belong to the storage layer.
    pub async fn update(&self, movie: &Movie) -> AppResult<()> {
        log::debug!("Updating movie {}", movie.id);
        self.repo.update(movie).await
    }

    /// One read before one write: fetch the current record, overlay the
    /// fields present in the patch, write the merged record back.
    pub async fn partially_update(&self, patch: MoviePatch) -> AppResult<()> {
        let mut movie = self.get_one(patch.id).await?;
        patch.apply_to(&mut movie);
        self.repo.update(&movie).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        log::debug!("Deleting movie {}", id);
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMovieRepository;
    use mockall::predicate::eq;

    fn movie(id: i32, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            trailer: "https://example.com/trailer".to_string(),
            year: 2000,
            rating: 7.5,
            genre_id: 3,
            director_id: 4,
        }
    }

    #[tokio::test]
    async fn get_one_returns_the_stored_record() {
        let mut repo = MockMovieRepository::new();
        repo.expect_get_one()
            .with(eq(1))
            .returning(|_| Ok(Some(movie(1, "test"))));

        let service = MovieService::new(Arc::new(repo));
        assert_eq!(service.get_one(1).await.unwrap(), movie(1, "test"));
    }

    #[tokio::test]
    async fn get_one_missing_id_is_not_found() {
        let mut repo = MockMovieRepository::new();
        repo.expect_get_one().with(eq(0)).returning(|_| Ok(None));

        let service = MovieService::new(Arc::new(repo));
        assert!(matches!(
            service.get_one(0).await.unwrap_err(),
            AppError::MovieNotFound(0)
        ));
    }

    #[tokio::test]
    async fn get_all_passes_through_unmodified() {
        for data in [vec![movie(1, "test"), movie(2, "test_name")], vec![]] {
            let mut repo = MockMovieRepository::new();
            let returned = data.clone();
            repo.expect_get_all()
                .returning(move || Ok(returned.clone()));

            let service = MovieService::new(Arc::new(repo));
            assert_eq!(service.get_all().await.unwrap(), data);
        }
    }

    #[tokio::test]
    async fn update_delegates_with_the_exact_record() {
        let mut repo = MockMovieRepository::new();
        repo.expect_update()
            .withf(|m| *m == movie(1, "test_name"))
            .times(1)
            .returning(|_| Ok(()));

        let service = MovieService::new(Arc::new(repo));
        service.update(&movie(1, "test_name")).await.unwrap();
    }

    #[tokio::test]
    async fn partially_update_merges_each_declared_field() {
        // One patched field at a time, every other field untouched.
        let patches: Vec<(MoviePatch, fn(&mut Movie))> = vec![
            (MoviePatch::new(1).with_title("t2".to_string()), |m| {
                m.title = "t2".to_string()
            }),
            (MoviePatch::new(1).with_description("d2".to_string()), |m| {
                m.description = "d2".to_string()
            }),
            (MoviePatch::new(1).with_trailer("tr2".to_string()), |m| {
                m.trailer = "tr2".to_string()
            }),
            (MoviePatch::new(1).with_year(2021), |m| m.year = 2021),
            (MoviePatch::new(1).with_rating(9.0), |m| m.rating = 9.0),
            (MoviePatch::new(1).with_genre_id(8), |m| m.genre_id = 8),
            (MoviePatch::new(1).with_director_id(9), |m| {
                m.director_id = 9
            }),
        ];

        for (patch, mutate) in patches {
            let mut repo = MockMovieRepository::new();
            repo.expect_get_one()
                .with(eq(1))
                .times(1)
                .returning(|_| Ok(Some(movie(1, "test"))));

            let mut expected = movie(1, "test");
            mutate(&mut expected);
            repo.expect_update()
                .withf(move |m| *m == expected)
                .times(1)
                .returning(|_| Ok(()));

            let service = MovieService::new(Arc::new(repo));
            service.partially_update(patch).await.unwrap();
        }
    }

    #[tokio::test]
    async fn partially_update_with_no_known_fields_keeps_the_original() {
        let mut repo = MockMovieRepository::new();
        repo.expect_get_one()
            .with(eq(1))
            .returning(|_| Ok(Some(movie(1, "test"))));
        repo.expect_update()
            .withf(|m| *m == movie(1, "test"))
            .times(1)
            .returning(|_| Ok(()));

        let service = MovieService::new(Arc::new(repo));
        let patch: MoviePatch = serde_json::from_value(serde_json::json!({
            "id": 1,
            "wrong_field": "wrong_data",
        }))
        .unwrap();
        service.partially_update(patch).await.unwrap();
    }

    #[tokio::test]
    async fn repository_errors_propagate_untouched() {
        let mut repo = MockMovieRepository::new();
        repo.expect_get_all()
            .returning(|| Err(AppError::DatabaseError("connection lost".to_string())));

        let service = MovieService::new(Arc::new(repo));
        assert!(matches!(
            service.get_all().await.unwrap_err(),
            AppError::DatabaseError(_)
        ));
    }

    #[tokio::test]
    async fn delete_delegates_once_with_the_id() {
        let mut repo = MockMovieRepository::new();
        repo.expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let service = MovieService::new(Arc::new(repo));
        service.delete(1).await.unwrap();
    }
}
