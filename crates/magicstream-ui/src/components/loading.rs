//! Loading indicator shown while a fetch is pending.

use yew::prelude::*;

use crate::logic::{
    LOADING_CONTAINER_CLASS, LOADING_CONTAINER_STYLE, LOADING_LABEL, LOADING_SPINNER_CLASS,
};

/// Stateless spinner: a centered, fixed-height container whose label is only
/// announced to assistive technology. Mount/unmount is owned by the caller's
/// conditional render.
#[function_component(Loading)]
pub(crate) fn loading() -> Html {
    html! {
        <div class={LOADING_CONTAINER_CLASS} style={LOADING_CONTAINER_STYLE}>
            <span class={LOADING_SPINNER_CLASS} role="status">
                <span class="visually-hidden">{ LOADING_LABEL }</span>
            </span>
        </div>
    }
}
