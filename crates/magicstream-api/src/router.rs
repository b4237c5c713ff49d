//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{
        HeaderValue, Method, Request,
        header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN},
    },
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::catalog::SharedCatalog;
use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::CORS_MAX_AGE_SECS;
use crate::http::health::{health, hello};
use crate::http::movies::{
    add_movie, get_movie, list_genres, list_movies, recommended_movies, update_review,
};
use crate::state::ApiState;

/// Axum router wrapper that hosts the MagicStream API services.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct a new API server around a catalog backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured CORS origin is not a valid header
    /// value.
    pub fn new(catalog: SharedCatalog, allowed_origins: &[String]) -> ApiServerResult<Self> {
        let state = Arc::new(ApiState::new(catalog));
        let cors_layer = build_cors_layer(allowed_origins)?;
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );

        let router = Self::build_router()
            .layer(cors_layer)
            .layer(trace_layer)
            .with_state(state);

        Ok(Self { router })
    }

    fn build_router() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/hello", get(hello))
            .route("/health", get(health))
            .route("/movies", get(list_movies))
            .route("/movie/{imdb_id}", get(get_movie))
            .route("/addmovie", post(add_movie))
            .route("/genres", get(list_genres))
            .route("/recommendedmovies", get(recommended_movies))
            .route("/updatereview/{imdb_id}", patch(update_review))
    }

    /// Serve the API using the configured router on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server
    /// terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> ApiServerResult<()> {
        tracing::info!("Starting API on {}", addr);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|source| ApiServerError::Serve { source })?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) const fn router(&self) -> &Router {
        &self.router
    }
}

fn build_cors_layer(allowed_origins: &[String]) -> ApiServerResult<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ApiServerError::InvalidOrigin {
                    origin: origin.clone(),
                })
        })
        .collect::<ApiServerResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECS)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use magicstream_api_models::{Genre, Movie};
    use magicstream_data::{DataError, DataResult};
    use std::sync::Mutex;
    use tower::ServiceExt;

    use crate::catalog::CatalogFacade;

    #[derive(Default)]
    struct InMemoryCatalog {
        movies: Mutex<Vec<Movie>>,
        genres: Mutex<Vec<Genre>>,
    }

    #[async_trait]
    impl CatalogFacade for InMemoryCatalog {
        async fn ping(&self) -> DataResult<()> {
            Ok(())
        }

        async fn list_movies(&self) -> DataResult<Vec<Movie>> {
            Ok(self.movies.lock().unwrap().clone())
        }

        async fn movie_by_id(&self, imdb_id: &str) -> DataResult<Option<Movie>> {
            Ok(self
                .movies
                .lock()
                .unwrap()
                .iter()
                .find(|movie| movie.imdb_id == imdb_id)
                .cloned())
        }

        async fn insert_movie(&self, movie: &Movie) -> DataResult<()> {
            let mut movies = self.movies.lock().unwrap();
            if movies.iter().any(|known| known.imdb_id == movie.imdb_id) {
                return Err(DataError::DuplicateMovie {
                    imdb_id: movie.imdb_id.clone(),
                });
            }
            movies.push(movie.clone());
            let mut genres = self.genres.lock().unwrap();
            for genre in &movie.genres {
                if !genres.iter().any(|known| known.genre_id == genre.genre_id) {
                    genres.push(genre.clone());
                }
            }
            Ok(())
        }

        async fn list_genres(&self) -> DataResult<Vec<Genre>> {
            Ok(self.genres.lock().unwrap().clone())
        }

        async fn recommended(&self, genre_ids: &[i32]) -> DataResult<Vec<Movie>> {
            let movies = self.movies.lock().unwrap();
            if genre_ids.is_empty() {
                return Ok(movies.clone());
            }
            Ok(movies
                .iter()
                .filter(|movie| {
                    movie
                        .genres
                        .iter()
                        .any(|genre| genre_ids.contains(&genre.genre_id))
                })
                .cloned()
                .collect())
        }

        async fn update_review(&self, imdb_id: &str, admin_review: &str) -> DataResult<()> {
            let mut movies = self.movies.lock().unwrap();
            let Some(movie) = movies.iter_mut().find(|movie| movie.imdb_id == imdb_id) else {
                return Err(DataError::MovieNotFound {
                    imdb_id: imdb_id.to_string(),
                });
            };
            movie.admin_review = Some(admin_review.to_string());
            Ok(())
        }
    }

    fn sample_movie(imdb_id: &str, genre_id: i32) -> Movie {
        Movie {
            imdb_id: imdb_id.to_string(),
            title: format!("Movie {imdb_id}"),
            overview: "overview".to_string(),
            poster_path: "/poster.jpg".to_string(),
            youtube_trailer_id: None,
            genres: vec![Genre {
                genre_id,
                genre_name: format!("Genre {genre_id}"),
            }],
            admin_review: None,
            ranking: None,
        }
    }

    fn server_with(movies: Vec<Movie>) -> ApiServer {
        let catalog = InMemoryCatalog::default();
        {
            let mut stored = catalog.movies.lock().unwrap();
            *stored = movies;
        }
        ApiServer::new(
            Arc::new(catalog),
            &["http://localhost:5173".to_string()],
        )
        .expect("server should build")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("valid json body")
    }

    #[tokio::test]
    async fn hello_route_greets() {
        let server = server_with(vec![]);
        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_reports_database_component() {
        let server = server_with(vec![]);
        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn movies_listing_round_trips() {
        let server = server_with(vec![sample_movie("tt0000001", 18)]);
        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/movies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["imdb_id"], "tt0000001");
    }

    #[tokio::test]
    async fn unknown_movie_is_a_problem_document() {
        let server = server_with(vec![]);
        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/movie/tt0000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["title"], "resource not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn add_movie_validates_and_creates() {
        let server = server_with(vec![]);

        let invalid = serde_json::json!({
            "imdb_id": "",
            "title": "",
            "overview": "",
            "poster_path": "",
            "genres": []
        });
        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/addmovie")
                    .header("content-type", "application/json")
                    .body(Body::from(invalid.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["invalid_params"][0]["pointer"], "/imdb_id");

        let valid = serde_json::to_string(&sample_movie("tt0000002", 14)).unwrap();
        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/addmovie")
                    .header("content-type", "application/json")
                    .body(Body::from(valid.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/addmovie")
                    .header("content-type", "application/json")
                    .body(Body::from(valid))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn recommended_movies_filter_by_genre_query() {
        let server = server_with(vec![
            sample_movie("tt0000001", 18),
            sample_movie("tt0000002", 14),
        ]);
        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/recommendedmovies?genres=14")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["imdb_id"], "tt0000002");

        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/recommendedmovies?genres=fantasy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn review_update_hits_catalog_or_404s() {
        let server = server_with(vec![sample_movie("tt0000001", 18)]);
        let payload = serde_json::json!({"admin_review": "A new classic."});

        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/updatereview/tt0000001")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = server
            .router()
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/updatereview/tt0000000")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_origin_is_rejected_at_build_time() {
        let catalog = Arc::new(InMemoryCatalog::default());
        let err = ApiServer::new(catalog, &["http://bad\norigin".to_string()])
            .err()
            .expect("origin must be rejected");
        assert_eq!(
            err.to_string(),
            "configured origin is not a valid header value"
        );
    }
}
