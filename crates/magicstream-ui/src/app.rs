//! Application shell: context wiring, routing, and the wasm entrypoint.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::env::api_base_url;
use crate::components::add_movie::AddMoviePage;
use crate::components::movie_detail::MovieDetailPage;
use crate::components::movies::MoviesPage;
pub(crate) use routes::Route;

pub(crate) mod api;
mod env;
mod routes;

#[function_component(MagicStreamApp)]
pub(crate) fn magic_stream_app() -> Html {
    // One client per app boot; the context hands out shared references.
    let api_ctx = use_state(|| ApiCtx::new(api_base_url()));

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <NavBar />
                <main class="container py-4">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <MoviesPage /> },
        Route::AddMovie => html! { <AddMoviePage /> },
        Route::Movie { imdb_id } => html! { <MovieDetailPage {imdb_id} /> },
        Route::NotFound => html! {
            <div class="alert alert-warning" role="alert">{ "Nothing to see here." }</div>
        },
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    html! {
        <nav class="navbar navbar-dark bg-dark">
            <div class="container">
                <Link<Route> classes="navbar-brand" to={Route::Home}>
                    { "MagicStream" }
                </Link<Route>>
                <Link<Route> classes="btn btn-outline-light btn-sm" to={Route::AddMovie}>
                    { "Add movie" }
                </Link<Route>>
            </div>
        </nav>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MagicStreamApp>::with_root(root).render();
    } else {
        yew::Renderer::<MagicStreamApp>::new().render();
    }
}
