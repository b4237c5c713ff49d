//! Routing definitions for the MagicStream UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/addmovie")]
    AddMovie,
    #[at("/movie/:imdb_id")]
    Movie {
        /// IMDb id of the movie being viewed.
        imdb_id: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}
