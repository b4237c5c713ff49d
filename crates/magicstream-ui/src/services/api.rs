//! HTTP client helpers (REST).
//!
//! Every request carries the JSON content type and forwards browser
//! credentials; the base URL is fixed at construction and never mutated.

use gloo_net::http::Request;
use magicstream_api_models::{Genre, Movie, ReviewUpdateRequest};
use web_sys::RequestCredentials;

use crate::logic::build_recommended_path;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> anyhow::Result<T> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn fetch_movies(&self) -> anyhow::Result<Vec<Movie>> {
        self.get_json("/movies").await
    }

    pub(crate) async fn fetch_movie(&self, imdb_id: &str) -> anyhow::Result<Movie> {
        self.get_json(&format!("/movie/{imdb_id}")).await
    }

    pub(crate) async fn fetch_genres(&self) -> anyhow::Result<Vec<Genre>> {
        self.get_json("/genres").await
    }

    pub(crate) async fn fetch_recommended(&self, genre_ids: &[i32]) -> anyhow::Result<Vec<Movie>> {
        self.get_json(&build_recommended_path(genre_ids)).await
    }

    pub(crate) async fn add_movie(&self, movie: &Movie) -> anyhow::Result<Movie> {
        let request = Request::post(&format!("{}/addmovie", self.base_url))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .json(movie)?;
        Ok(request.send().await?.json::<Movie>().await?)
    }

    pub(crate) async fn update_review(
        &self,
        imdb_id: &str,
        admin_review: impl Into<String>,
    ) -> anyhow::Result<()> {
        let body = ReviewUpdateRequest {
            admin_review: admin_review.into(),
        };
        let request = Request::patch(&format!("{}/updatereview/{imdb_id}", self.base_url))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .json(&body)?;
        request.send().await?;
        Ok(())
    }
}
