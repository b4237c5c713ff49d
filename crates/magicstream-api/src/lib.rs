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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Axum REST API for the MagicStream movie catalog.
//!
//! Layout: `catalog.rs` (storage facade trait), `state.rs` (shared app
//! state), `http/` (handlers, errors, constants), `router.rs` (route table,
//! CORS, tracing, serve loop).

pub mod catalog;
pub mod error;
mod http;
pub mod router;
pub mod state;

pub use catalog::{CatalogFacade, SharedCatalog};
pub use error::{ApiServerError, ApiServerResult};
pub use router::ApiServer;
pub use state::ApiState;
