//! Movie catalog route handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
};
use magicstream_api_models::{Genre, Movie, ReviewUpdateRequest};
use serde::Deserialize;
use tracing::info;

use crate::http::errors::ApiError;
use crate::state::ApiState;

pub(crate) async fn list_movies(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state
        .catalog
        .list_movies()
        .await
        .map_err(|err| ApiError::from_data("list_movies", &err))?;
    Ok(Json(movies))
}

pub(crate) async fn get_movie(
    State(state): State<Arc<ApiState>>,
    AxumPath(imdb_id): AxumPath<String>,
) -> Result<Json<Movie>, ApiError> {
    if imdb_id.trim().is_empty() {
        return Err(ApiError::bad_request("movie id is required"));
    }
    let movie = state
        .catalog
        .movie_by_id(&imdb_id)
        .await
        .map_err(|err| ApiError::from_data("movie_by_id", &err))?
        .ok_or_else(|| ApiError::not_found(format!("movie {imdb_id} is not in the catalog")))?;
    Ok(Json(movie))
}

pub(crate) async fn add_movie(
    State(state): State<Arc<ApiState>>,
    Json(movie): Json<Movie>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let problems = movie.validate();
    if !problems.is_empty() {
        return Err(ApiError::bad_request("movie validation failed")
            .with_invalid_params(problems));
    }

    state
        .catalog
        .insert_movie(&movie)
        .await
        .map_err(|err| ApiError::from_data("insert_movie", &err))?;
    info!(imdb_id = %movie.imdb_id, title = %movie.title, "movie added to catalog");
    Ok((StatusCode::CREATED, Json(movie)))
}

pub(crate) async fn list_genres(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Genre>>, ApiError> {
    let genres = state
        .catalog
        .list_genres()
        .await
        .map_err(|err| ApiError::from_data("list_genres", &err))?;
    Ok(Json(genres))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendedQuery {
    /// Comma-separated genre id filter, e.g. `genres=14,18`.
    pub(crate) genres: Option<String>,
}

pub(crate) async fn recommended_movies(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<RecommendedQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let genre_ids = parse_genre_filter(query.genres.as_deref())
        .map_err(|raw| ApiError::bad_request(format!("invalid genre id: {raw}")))?;
    let movies = state
        .catalog
        .recommended(&genre_ids)
        .await
        .map_err(|err| ApiError::from_data("recommended", &err))?;
    Ok(Json(movies))
}

pub(crate) async fn update_review(
    State(state): State<Arc<ApiState>>,
    AxumPath(imdb_id): AxumPath<String>,
    Json(request): Json<ReviewUpdateRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog
        .update_review(&imdb_id, &request.admin_review)
        .await
        .map_err(|err| ApiError::from_data("update_review", &err))?;
    info!(imdb_id = %imdb_id, "admin review updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Parse the comma-separated genre filter, ignoring empty segments.
///
/// Returns the offending segment when one fails to parse.
fn parse_genre_filter(raw: Option<&str>) -> Result<Vec<i32>, String> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.parse().map_err(|_| segment.to_string()))
        .collect()
}
