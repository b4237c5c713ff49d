//! Shared application state for the HTTP handlers.

use crate::catalog::SharedCatalog;

/// State injected into every handler.
pub struct ApiState {
    /// Catalog backend the handlers read and write through.
    pub catalog: SharedCatalog,
}

impl ApiState {
    /// Build the handler state around a catalog backend.
    #[must_use]
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}
