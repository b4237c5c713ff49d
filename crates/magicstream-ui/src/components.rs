//! Yew components for the MagicStream views.

pub(crate) mod add_movie;
pub(crate) mod loading;
pub(crate) mod movie_card;
pub(crate) mod movie_detail;
pub(crate) mod movies;
