use leptos::prelude::*;

/// Inline spinner sized for a button label.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-white/40 border-t-white"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
