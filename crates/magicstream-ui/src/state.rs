//! View state shared by the pages.

/// Lifecycle of an asynchronous fetch driving a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Request in flight; views render the loading indicator.
    Pending,
    /// Response decoded successfully.
    Ready(T),
    /// Request failed; the message is shown to the user.
    Failed(String),
}

impl<T> FetchState<T> {
    /// Whether the view should show the loading indicator.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magicstream_api_models::{Genre, Movie};

    fn movie(imdb_id: &str) -> Movie {
        Movie {
            imdb_id: imdb_id.to_string(),
            title: "alpha".to_string(),
            overview: String::new(),
            poster_path: String::new(),
            youtube_trailer_id: None,
            genres: vec![Genre {
                genre_id: 18,
                genre_name: "Drama".to_string(),
            }],
            admin_review: None,
            ranking: None,
        }
    }

    #[test]
    fn pending_state_requests_the_indicator() {
        assert!(FetchState::<Vec<Movie>>::Pending.is_pending());
        assert!(!FetchState::Ready(vec![movie("tt1")]).is_pending());
        assert!(!FetchState::<Vec<Movie>>::Failed("boom".to_string()).is_pending());
    }
}
