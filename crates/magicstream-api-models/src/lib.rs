#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the MagicStream public API.
//!
//! These types are re-used by the web client for request/response encoding so
//! the wire contract stays a single source of truth next to the server.

use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Parameters that failed validation, if applicable.
    pub invalid_params: Option<Vec<ProblemInvalidParam>>,
}

/// Invalid parameter pointer surfaced alongside a [`ProblemDetails`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemInvalidParam {
    /// JSON Pointer to the offending field.
    pub pointer: String,
    /// Human-readable description of the validation failure.
    pub message: String,
}

/// A single genre label attached to catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Stable numeric identifier for the genre.
    pub genre_id: i32,
    /// Display name (e.g. `"Fantasy"`).
    pub genre_name: String,
}

/// A catalog movie as exchanged over the wire.
///
/// The same shape is accepted by `POST /addmovie` and returned by the read
/// endpoints; optional fields are omitted from responses when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// IMDb identifier, the catalog primary key (e.g. `"tt0111161"`).
    pub imdb_id: String,
    /// Display title.
    pub title: String,
    /// Short synopsis shown on cards and detail pages.
    pub overview: String,
    /// Relative poster image path.
    pub poster_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// YouTube video id for the trailer, when one is curated.
    pub youtube_trailer_id: Option<String>,
    /// Genres the movie is filed under.
    pub genres: Vec<Genre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Editorial review maintained via `PATCH /updatereview`.
    pub admin_review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Catalog ranking position, lower is more prominent.
    pub ranking: Option<i32>,
}

impl Movie {
    /// Validate the fields required for catalog insertion.
    ///
    /// Returns one [`ProblemInvalidParam`] per violation; an empty vector
    /// means the movie is acceptable.
    #[must_use]
    pub fn validate(&self) -> Vec<ProblemInvalidParam> {
        let mut problems = Vec::new();
        if self.imdb_id.trim().is_empty() {
            problems.push(ProblemInvalidParam {
                pointer: "/imdb_id".to_string(),
                message: "imdb id must not be empty".to_string(),
            });
        }
        if self.title.trim().is_empty() {
            problems.push(ProblemInvalidParam {
                pointer: "/title".to_string(),
                message: "title must not be empty".to_string(),
            });
        }
        for (index, genre) in self.genres.iter().enumerate() {
            if genre.genre_name.trim().is_empty() {
                problems.push(ProblemInvalidParam {
                    pointer: format!("/genres/{index}/genre_name"),
                    message: "genre name must not be empty".to_string(),
                });
            }
        }
        problems
    }
}

/// Payload for `PATCH /updatereview/:imdb_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewUpdateRequest {
    /// Replacement editorial review text.
    pub admin_review: String,
}
