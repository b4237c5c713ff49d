//! Card summarising one catalog movie in the grid.

use magicstream_api_models::Movie;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::logic::overview_snippet;

const OVERVIEW_CHARS: usize = 140;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie: Movie,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;
    let genres = movie
        .genres
        .iter()
        .map(|genre| {
            html! { <span class="badge text-bg-secondary me-1">{ &genre.genre_name }</span> }
        })
        .collect::<Html>();

    html! {
        <div class="col">
            <div class="card h-100">
                <img class="card-img-top" src={movie.poster_path.clone()} alt={movie.title.clone()} />
                <div class="card-body">
                    <h5 class="card-title">{ &movie.title }</h5>
                    <p class="card-text">{ overview_snippet(&movie.overview, OVERVIEW_CHARS) }</p>
                    { genres }
                    <Link<Route> classes="stretched-link" to={Route::Movie { imdb_id: movie.imdb_id.clone() }}>
                        { "Details" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
