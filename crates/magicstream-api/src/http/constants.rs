//! Shared HTTP constants (problem URIs, CORS values).

pub(crate) const PROBLEM_INTERNAL: &str = "https://magicstream.dev/problems/internal";
pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://magicstream.dev/problems/bad-request";
pub(crate) const PROBLEM_CONFLICT: &str = "https://magicstream.dev/problems/conflict";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://magicstream.dev/problems/not-found";
pub(crate) const PROBLEM_SERVICE_UNAVAILABLE: &str =
    "https://magicstream.dev/problems/service-unavailable";

/// Preflight cache lifetime mirrored from the original deployment.
pub(crate) const CORS_MAX_AGE_SECS: u64 = 12 * 60 * 60;
