//! Success / destructive alert shown above the form inputs.

use dropform_core::{Alert, AlertKind};
use leptos::*;

/// CSS classes for an alert variant.
pub fn alert_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Destructive => "alert alert-destructive",
        AlertKind::Success => "alert alert-success",
    }
}

fn alert_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Destructive => "⚠️",
        AlertKind::Success => "✅",
    }
}

#[component]
pub fn AlertBox(alert: Alert) -> impl IntoView {
    view! {
        <div class=alert_class(alert.kind) role="alert">
            <span class="alert-icon">{alert_icon(alert.kind)}</span>
            <div class="alert-title">{alert.title}</div>
            <div class="alert-description">{alert.message}</div>
        </div>
    }
}
