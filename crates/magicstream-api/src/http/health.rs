//! Health and diagnostics endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::warn;

use crate::http::errors::ApiError;
use crate::state::ApiState;

#[derive(Serialize)]
pub(crate) struct HealthComponent {
    pub(crate) status: &'static str,
}

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) database: HealthComponent,
}

/// Liveness greeting kept from the original service.
pub(crate) async fn hello() -> &'static str {
    "Hello, MagicStream!"
}

pub(crate) async fn health(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    match state.catalog.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ok",
            database: HealthComponent { status: "ok" },
        })),
        Err(err) => {
            warn!(error = %err, "health check failed to reach database");
            Err(ApiError::service_unavailable(
                "database is currently unavailable",
            ))
        }
    }
}
