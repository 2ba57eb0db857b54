//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Files are kept private. The download link is only sent by email."</div>
        </footer>
    }
}
