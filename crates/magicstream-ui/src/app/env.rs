//! Environment helpers for the app shell.

use gloo::console;

use crate::logic::resolve_base_url;

/// Resolve the API origin once at boot, logging the outcome.
///
/// `MAGICSTREAM_API_BASE_URL` is baked in at build time; absent or empty
/// values fall back to the localhost default.
pub(crate) fn api_base_url() -> String {
    let resolved = resolve_base_url(option_env!("MAGICSTREAM_API_BASE_URL"));
    console::info!("API base URL:", resolved.as_str());
    resolved
}
