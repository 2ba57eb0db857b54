//! Hero section component

use leptos::*;

use crate::{APP_TAGLINE, APP_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">{APP_TAGLINE}</p>
        </div>
    }
}
