//! Form for cataloguing a new movie.

use magicstream_api_models::Movie;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::logic::parse_genre_entries;

#[function_component(AddMoviePage)]
pub(crate) fn add_movie_page() -> Html {
    let api_ctx = use_context::<ApiCtx>().expect("api context not provided");
    let navigator = use_navigator().expect("navigator not available");

    let imdb_id = use_state(String::new);
    let title = use_state(String::new);
    let overview = use_state(String::new);
    let poster_path = use_state(String::new);
    let genres_input = use_state(String::new);
    let error = use_state(|| None::<String>);
    let pending = use_state(|| false);

    let on_submit = {
        let client = api_ctx.client.clone();
        let navigator = navigator.clone();
        let imdb_id = imdb_id.clone();
        let title = title.clone();
        let overview = overview.clone();
        let poster_path = poster_path.clone();
        let genres_input = genres_input.clone();
        let error = error.clone();
        let pending = pending.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let genres = match parse_genre_entries(&genres_input) {
                Ok(genres) => genres,
                Err(segment) => {
                    error.set(Some(format!("invalid genre entry: {segment}")));
                    return;
                }
            };
            let movie = Movie {
                imdb_id: (*imdb_id).clone(),
                title: (*title).clone(),
                overview: (*overview).clone(),
                poster_path: (*poster_path).clone(),
                youtube_trailer_id: None,
                genres,
                admin_review: None,
                ranking: None,
            };
            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let pending = pending.clone();
            pending.set(true);
            yew::platform::spawn_local(async move {
                match client.add_movie(&movie).await {
                    Ok(_) => navigator.push(&Route::Home),
                    Err(err) => {
                        pending.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let text_input = |label: &str, value: &UseStateHandle<String>| {
        let handle = value.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        });
        html! {
            <div class="mb-3">
                <label class="form-label">{ label.to_string() }</label>
                <input class="form-control" value={(**value).clone()} {oninput} />
            </div>
        }
    };

    let on_overview_input = {
        let overview = overview.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                overview.set(area.value());
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="col-md-6">
            <h2>{ "Add a movie" }</h2>
            {
                error.as_ref().map_or_else(
                    || html! {},
                    |message| html! {
                        <div class="alert alert-danger" role="alert">{ message.clone() }</div>
                    },
                )
            }
            { text_input("IMDb id", &imdb_id) }
            { text_input("Title", &title) }
            <div class="mb-3">
                <label class="form-label">{ "Overview" }</label>
                <textarea class="form-control" rows="4" value={(*overview).clone()} oninput={on_overview_input} />
            </div>
            { text_input("Poster path", &poster_path) }
            { text_input("Genres (id:name, comma separated)", &genres_input) }
            <button class="btn btn-primary" type="submit" disabled={*pending}>
                { if *pending { "Saving..." } else { "Save" } }
            </button>
        </form>
    }
}
