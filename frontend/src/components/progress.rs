use leptos::*;

/// Inline style for the filled part of the bar.
pub fn progress_style(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    view! {
        <div
            class="progress-bar"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || percent.get().to_string()
        >
            <div class="progress-fill" style=move || progress_style(percent.get())></div>
        </div>
    }
}
