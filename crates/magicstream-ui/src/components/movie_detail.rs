//! Detail view for a single catalog movie.

use magicstream_api_models::Movie;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::loading::Loading;
use crate::logic::trailer_url;
use crate::state::FetchState;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieDetailProps {
    pub imdb_id: AttrValue,
}

#[function_component(MovieDetailPage)]
pub(crate) fn movie_detail_page(props: &MovieDetailProps) -> Html {
    let api_ctx = use_context::<ApiCtx>().expect("api context not provided");
    let movie = use_state(|| FetchState::<Movie>::Pending);

    {
        let movie = movie.clone();
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |imdb_id: &AttrValue| {
                let imdb_id = imdb_id.to_string();
                movie.set(FetchState::Pending);
                yew::platform::spawn_local(async move {
                    match client.fetch_movie(&imdb_id).await {
                        Ok(found) => movie.set(FetchState::Ready(found)),
                        Err(err) => movie.set(FetchState::Failed(err.to_string())),
                    }
                });
                || ()
            },
            props.imdb_id.clone(),
        );
    }

    match &*movie {
        FetchState::Pending => html! { <Loading /> },
        FetchState::Failed(message) => html! {
            <div class="alert alert-danger" role="alert">{ message.clone() }</div>
        },
        FetchState::Ready(found) => html! {
            <div class="row g-4">
                <div class="col-md-4">
                    <img class="img-fluid rounded" src={found.poster_path.clone()} alt={found.title.clone()} />
                </div>
                <div class="col-md-8">
                    <h2>{ &found.title }</h2>
                    <p>{ &found.overview }</p>
                    {
                        found.youtube_trailer_id.as_ref().map_or_else(
                            || html! {},
                            |id| html! {
                                <a class="btn btn-outline-primary mb-3" href={trailer_url(id)} target="_blank">
                                    { "Watch trailer" }
                                </a>
                            },
                        )
                    }
                    <ReviewEditor movie={found.clone()} on_saved={
                        let movie = movie.clone();
                        Callback::from(move |updated: Movie| movie.set(FetchState::Ready(updated)))
                    } />
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ReviewEditorProps {
    movie: Movie,
    on_saved: Callback<Movie>,
}

/// Editorial review panel with an inline editor.
#[function_component(ReviewEditor)]
fn review_editor(props: &ReviewEditorProps) -> Html {
    let api_ctx = use_context::<ApiCtx>().expect("api context not provided");
    let draft = use_state(|| props.movie.admin_review.clone().unwrap_or_default());
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(area.value());
            }
        })
    };

    let on_save = {
        let client = api_ctx.client.clone();
        let draft = draft.clone();
        let saving = saving.clone();
        let error = error.clone();
        let movie = props.movie.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_| {
            let client = client.clone();
            let review = (*draft).clone();
            let saving = saving.clone();
            let error = error.clone();
            let mut updated = movie.clone();
            let on_saved = on_saved.clone();
            saving.set(true);
            yew::platform::spawn_local(async move {
                match client.update_review(&updated.imdb_id, review.clone()).await {
                    Ok(()) => {
                        updated.admin_review = Some(review);
                        saving.set(false);
                        error.set(None);
                        on_saved.emit(updated);
                    }
                    Err(err) => {
                        saving.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="mt-3">
            <h5>{ "MagicStream review" }</h5>
            {
                error.as_ref().map_or_else(
                    || html! {},
                    |message| html! {
                        <div class="alert alert-danger" role="alert">{ message.clone() }</div>
                    },
                )
            }
            <textarea class="form-control mb-2" rows="3" value={(*draft).clone()} oninput={on_input} />
            <button class="btn btn-secondary btn-sm" onclick={on_save} disabled={*saving}>
                { if *saving { "Saving..." } else { "Save review" } }
            </button>
        </div>
    }
}
