//! Catalog storage facade used by the HTTP layer.

use std::sync::Arc;

use async_trait::async_trait;
use magicstream_api_models::{Genre, Movie};
use magicstream_data::{CatalogStore, DataResult};

/// Trait defining the catalog backend used by the API layer.
#[async_trait]
pub trait CatalogFacade: Send + Sync {
    /// Verify the backing store is reachable.
    async fn ping(&self) -> DataResult<()>;
    /// Fetch every movie, ranked entries first.
    async fn list_movies(&self) -> DataResult<Vec<Movie>>;
    /// Fetch one movie by imdb id.
    async fn movie_by_id(&self, imdb_id: &str) -> DataResult<Option<Movie>>;
    /// Insert a new movie into the catalog.
    async fn insert_movie(&self, movie: &Movie) -> DataResult<()>;
    /// Fetch the known genre labels.
    async fn list_genres(&self) -> DataResult<Vec<Genre>>;
    /// Fetch movies filed under any of the supplied genre ids.
    async fn recommended(&self, genre_ids: &[i32]) -> DataResult<Vec<Movie>>;
    /// Replace the editorial review on a movie.
    async fn update_review(&self, imdb_id: &str, admin_review: &str) -> DataResult<()>;
}

/// Shared reference to the catalog backend.
pub type SharedCatalog = Arc<dyn CatalogFacade>;

#[async_trait]
impl CatalogFacade for CatalogStore {
    async fn ping(&self) -> DataResult<()> {
        Self::ping(self).await
    }

    async fn list_movies(&self) -> DataResult<Vec<Movie>> {
        Self::list_movies(self).await
    }

    async fn movie_by_id(&self, imdb_id: &str) -> DataResult<Option<Movie>> {
        Self::movie_by_id(self, imdb_id).await
    }

    async fn insert_movie(&self, movie: &Movie) -> DataResult<()> {
        Self::insert_movie(self, movie).await
    }

    async fn list_genres(&self) -> DataResult<Vec<Genre>> {
        Self::list_genres(self).await
    }

    async fn recommended(&self, genre_ids: &[i32]) -> DataResult<Vec<Movie>> {
        Self::recommended(self, genre_ids).await
    }

    async fn update_review(&self, imdb_id: &str, admin_review: &str) -> DataResult<()> {
        Self::update_review(self, imdb_id, admin_review).await
    }
}
