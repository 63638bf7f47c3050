//! Loading Spinner Component

use leptos::prelude::*;

/// Spinner shown while a fetch is in flight
///
/// # Arguments
/// * `size` - "sm", "md" (default) or "lg"
#[component]
pub fn LoadingSpinner(#[prop(default = "md")] size: &'static str) -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class=format!("spinner spinner-{}", size) role="status" aria-label="Loading"></div>
        </div>
    }
}
