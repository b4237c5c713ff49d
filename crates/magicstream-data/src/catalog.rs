//! Postgres repository for the movie catalog.

use magicstream_api_models::{Genre, Movie};
use sqlx::{FromRow, PgPool, types::Json};
use tracing::debug;

use crate::error::{DataError, Result};

const SELECT_MOVIES: &str = r"
    SELECT imdb_id, title, overview, poster_path, youtube_trailer_id,
           genres, admin_review, ranking
    FROM movies
    ORDER BY ranking NULLS LAST, imdb_id
";

const SELECT_MOVIE_BY_ID: &str = r"
    SELECT imdb_id, title, overview, poster_path, youtube_trailer_id,
           genres, admin_review, ranking
    FROM movies
    WHERE imdb_id = $1
";

const INSERT_MOVIE: &str = r"
    INSERT INTO movies (imdb_id, title, overview, poster_path,
                        youtube_trailer_id, genres, admin_review, ranking)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    ON CONFLICT (imdb_id) DO NOTHING
";

const UPSERT_GENRE: &str = r"
    INSERT INTO genres (genre_id, genre_name)
    VALUES ($1, $2)
    ON CONFLICT (genre_id) DO UPDATE SET genre_name = EXCLUDED.genre_name
";

const SELECT_GENRES: &str = r"
    SELECT genre_id, genre_name FROM genres ORDER BY genre_id
";

const SELECT_MOVIES_BY_GENRES: &str = r"
    SELECT imdb_id, title, overview, poster_path, youtube_trailer_id,
           genres, admin_review, ranking
    FROM movies
    WHERE EXISTS (
        SELECT 1 FROM jsonb_array_elements(genres) AS entry
        WHERE (entry->>'genre_id')::int = ANY($1)
    )
    ORDER BY ranking NULLS LAST, imdb_id
";

const UPDATE_REVIEW: &str = r"
    UPDATE movies SET admin_review = $2 WHERE imdb_id = $1
";

#[derive(FromRow)]
struct MovieRow {
    imdb_id: String,
    title: String,
    overview: String,
    poster_path: String,
    youtube_trailer_id: Option<String>,
    genres: Json<Vec<Genre>>,
    admin_review: Option<String>,
    ranking: Option<i32>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            imdb_id: row.imdb_id,
            title: row.title,
            overview: row.overview,
            poster_path: row.poster_path,
            youtube_trailer_id: row.youtube_trailer_id,
            genres: row.genres.0,
            admin_review: row.admin_review,
            ranking: row.ranking,
        }
    }
}

#[derive(FromRow)]
struct GenreRow {
    genre_id: i32,
    genre_name: String,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Self {
            genre_id: row.genre_id,
            genre_name: row.genre_name,
        }
    }
}

/// Database-backed repository for the movie catalog.
#[derive(Clone)]
pub struct CatalogStore {
    pool: PgPool,
}

impl CatalogStore {
    /// Initialise the catalog store, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if migrations fail or the database is unreachable.
    pub async fn new(pool: PgPool) -> Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|source| DataError::MigrationFailed { source })?;
        Ok(Self { pool })
    }

    /// Access the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verify database connectivity with a trivial round trip.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| DataError::QueryFailed {
                operation: "ping",
                source,
            })?;
        Ok(())
    }

    /// Fetch every movie in the catalog, ranked entries first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        let rows: Vec<MovieRow> = sqlx::query_as(SELECT_MOVIES)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| DataError::QueryFailed {
                operation: "list_movies",
                source,
            })?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Fetch one movie by imdb id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn movie_by_id(&self, imdb_id: &str) -> Result<Option<Movie>> {
        let row: Option<MovieRow> = sqlx::query_as(SELECT_MOVIE_BY_ID)
            .bind(imdb_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| DataError::QueryFailed {
                operation: "movie_by_id",
                source,
            })?;
        Ok(row.map(Movie::from))
    }

    /// Insert a new movie, registering its genres alongside.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateMovie`] when the imdb id is already
    /// catalogued, or a query error if the database operation fails.
    pub async fn insert_movie(&self, movie: &Movie) -> Result<()> {
        let result = sqlx::query(INSERT_MOVIE)
            .bind(&movie.imdb_id)
            .bind(&movie.title)
            .bind(&movie.overview)
            .bind(&movie.poster_path)
            .bind(movie.youtube_trailer_id.as_deref())
            .bind(Json(&movie.genres))
            .bind(movie.admin_review.as_deref())
            .bind(movie.ranking)
            .execute(&self.pool)
            .await
            .map_err(|source| DataError::QueryFailed {
                operation: "insert_movie",
                source,
            })?;

        if result.rows_affected() == 0 {
            return Err(DataError::DuplicateMovie {
                imdb_id: movie.imdb_id.clone(),
            });
        }

        for genre in &movie.genres {
            sqlx::query(UPSERT_GENRE)
                .bind(genre.genre_id)
                .bind(&genre.genre_name)
                .execute(&self.pool)
                .await
                .map_err(|source| DataError::QueryFailed {
                    operation: "upsert_genre",
                    source,
                })?;
        }

        debug!(imdb_id = %movie.imdb_id, "movie inserted");
        Ok(())
    }

    /// Fetch the known genre labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_genres(&self) -> Result<Vec<Genre>> {
        let rows: Vec<GenreRow> = sqlx::query_as(SELECT_GENRES)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| DataError::QueryFailed {
                operation: "list_genres",
                source,
            })?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    /// Fetch movies filed under any of the supplied genre ids.
    ///
    /// An empty filter falls back to the full ranked listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn recommended(&self, genre_ids: &[i32]) -> Result<Vec<Movie>> {
        if genre_ids.is_empty() {
            return self.list_movies().await;
        }
        let rows: Vec<MovieRow> = sqlx::query_as(SELECT_MOVIES_BY_GENRES)
            .bind(genre_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| DataError::QueryFailed {
                operation: "recommended",
                source,
            })?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Replace the editorial review on a movie.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MovieNotFound`] when the imdb id has no catalog
    /// row, or a query error if the database operation fails.
    pub async fn update_review(&self, imdb_id: &str, admin_review: &str) -> Result<()> {
        let result = sqlx::query(UPDATE_REVIEW)
            .bind(imdb_id)
            .bind(admin_review)
            .execute(&self.pool)
            .await
            .map_err(|source| DataError::QueryFailed {
                operation: "update_review",
                source,
            })?;

        if result.rows_affected() == 0 {
            return Err(DataError::MovieNotFound {
                imdb_id: imdb_id.to_string(),
            });
        }
        Ok(())
    }
}
