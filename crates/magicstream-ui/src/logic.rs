//! Pure helpers backing the client factory and views.

/// Fallback API origin when no environment override is provided.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Text announced to screen readers while a fetch is pending.
pub const LOADING_LABEL: &str = "Loading...";

/// Flex container classes centering the loading indicator.
pub const LOADING_CONTAINER_CLASS: &str = "d-flex justify-content-center align-items-center";

/// Fixed height keeping the indicator from collapsing the page.
pub const LOADING_CONTAINER_STYLE: &str = "height: 200px;";

/// Spinner element classes (animation plus accent colour).
pub const LOADING_SPINNER_CLASS: &str = "spinner-border text-primary";

/// Resolve the API base URL from an optional environment override.
///
/// An absent or empty value yields [`DEFAULT_API_BASE_URL`]; any other value
/// is used exactly as given. No validation happens here; a malformed URL
/// surfaces as a transport error on first request.
#[must_use]
pub fn resolve_base_url(env_value: Option<&str>) -> String {
    match env_value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_API_BASE_URL.to_string(),
    }
}

/// Build the recommended-movies request path for a genre filter.
#[must_use]
pub fn build_recommended_path(genre_ids: &[i32]) -> String {
    if genre_ids.is_empty() {
        return "/recommendedmovies".to_string();
    }
    let ids: Vec<String> = genre_ids.iter().map(ToString::to_string).collect();
    format!("/recommendedmovies?genres={}", ids.join(","))
}

/// Truncate an overview for card display, appending an ellipsis when cut.
#[must_use]
pub fn overview_snippet(overview: &str, max_chars: usize) -> String {
    if overview.chars().count() <= max_chars {
        return overview.to_string();
    }
    let cut: String = overview.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Watch URL for a curated YouTube trailer id.
#[must_use]
pub fn trailer_url(youtube_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={youtube_id}")
}

/// Parse a comma-separated `id:name` genre list from the add-movie form.
/// Empty segments are ignored.
///
/// # Errors
///
/// Returns the offending segment when one is not an `id:name` pair with a
/// numeric id.
pub fn parse_genre_entries(raw: &str) -> Result<Vec<magicstream_api_models::Genre>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (id, name) = segment.split_once(':').ok_or_else(|| segment.to_string())?;
            let genre_id = id.trim().parse().map_err(|_| segment.to_string())?;
            let genre_name = name.trim();
            if genre_name.is_empty() {
                return Err(segment.to_string());
            }
            Ok(magicstream_api_models::Genre {
                genre_id,
                genre_name: genre_name.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_value_falls_back_to_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
        assert_eq!(resolve_base_url(None), "http://localhost:8080");
    }

    #[test]
    fn empty_env_value_falls_back_to_default() {
        assert_eq!(resolve_base_url(Some("")), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn non_empty_env_value_is_used_exactly() {
        assert_eq!(
            resolve_base_url(Some("https://api.magicstream.dev")),
            "https://api.magicstream.dev"
        );
        // Whitespace and malformed values pass through untouched.
        assert_eq!(resolve_base_url(Some(" ")), " ");
        assert_eq!(resolve_base_url(Some("not a url")), "not a url");
    }

    #[test]
    fn resolution_is_idempotent() {
        assert_eq!(
            resolve_base_url(Some("http://one:1234")),
            resolve_base_url(Some("http://one:1234"))
        );
    }

    #[test]
    fn recommended_path_carries_genre_filter() {
        assert_eq!(build_recommended_path(&[]), "/recommendedmovies");
        assert_eq!(
            build_recommended_path(&[14, 18]),
            "/recommendedmovies?genres=14,18"
        );
    }

    #[test]
    fn overview_snippet_truncates_long_text() {
        assert_eq!(overview_snippet("short", 10), "short");
        assert_eq!(overview_snippet("a longer overview", 8), "a longer...");
    }

    #[test]
    fn genre_entries_parse_id_name_pairs() {
        let genres = parse_genre_entries("18: Drama, 14:Fantasy,").expect("valid input");
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].genre_id, 18);
        assert_eq!(genres[0].genre_name, "Drama");
        assert_eq!(genres[1].genre_name, "Fantasy");
        assert!(parse_genre_entries("").expect("empty input").is_empty());
    }

    #[test]
    fn genre_entries_report_offending_segment() {
        assert_eq!(parse_genre_entries("18:Drama, Fantasy").unwrap_err(), "Fantasy");
        assert_eq!(parse_genre_entries("x:Drama").unwrap_err(), "x:Drama");
        assert_eq!(parse_genre_entries("18:").unwrap_err(), "18:");
    }

    #[test]
    fn loading_markup_constants_stay_fixed() {
        assert_eq!(LOADING_LABEL, "Loading...");
        assert!(LOADING_CONTAINER_CLASS.contains("justify-content-center"));
        assert_eq!(LOADING_CONTAINER_STYLE, "height: 200px;");
    }
}
