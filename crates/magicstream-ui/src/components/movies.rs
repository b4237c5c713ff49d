//! Movie grid view with genre filtering.

use magicstream_api_models::{Genre, Movie};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::loading::Loading;
use crate::components::movie_card::MovieCard;
use crate::state::FetchState;

#[function_component(MoviesPage)]
pub(crate) fn movies_page() -> Html {
    let api_ctx = use_context::<ApiCtx>().expect("api context not provided");
    let movies = use_state(|| FetchState::<Vec<Movie>>::Pending);
    let genres = use_state(Vec::<Genre>::new);
    let genre_filter = use_state(|| None::<i32>);

    {
        let genres = genres.clone();
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    if let Ok(fetched) = client.fetch_genres().await {
                        genres.set(fetched);
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let movies = movies.clone();
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |filter: &Option<i32>| {
                let filter = *filter;
                movies.set(FetchState::Pending);
                yew::platform::spawn_local(async move {
                    let result = match filter {
                        Some(genre_id) => client.fetch_recommended(&[genre_id]).await,
                        None => client.fetch_movies().await,
                    };
                    match result {
                        Ok(list) => movies.set(FetchState::Ready(list)),
                        Err(err) => movies.set(FetchState::Failed(err.to_string())),
                    }
                });
                || ()
            },
            *genre_filter,
        );
    }

    let on_filter_change = {
        let genre_filter = genre_filter.clone();
        Callback::from(move |event: Event| {
            let value = event
                .target_dyn_into::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            genre_filter.set(value.parse::<i32>().ok());
        })
    };

    let body = match &*movies {
        FetchState::Pending => html! { <Loading /> },
        FetchState::Failed(message) => html! {
            <div class="alert alert-danger" role="alert">{ message.clone() }</div>
        },
        FetchState::Ready(list) if list.is_empty() => html! {
            <p class="text-muted">{ "No movies in the catalog yet." }</p>
        },
        FetchState::Ready(list) => html! {
            <div class="row row-cols-1 row-cols-md-3 g-4">
                { for list.iter().cloned().map(|movie| html! { <MovieCard {movie} /> }) }
            </div>
        },
    };

    html! {
        <>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2>{ "Movies" }</h2>
                <select class="form-select w-auto" onchange={on_filter_change}>
                    <option value="" selected={genre_filter.is_none()}>{ "All genres" }</option>
                    { for genres.iter().map(|genre| {
                        let selected = *genre_filter == Some(genre.genre_id);
                        html! {
                            <option value={genre.genre_id.to_string()} {selected}>
                                { &genre.genre_name }
                            </option>
                        }
                    }) }
                </select>
            </div>
            { body }
        </>
    }
}
