use crate::registration::Progress;
use leptos::prelude::*;

fn fill(filled: bool) -> &'static str {
    if filled { "bg-blue-600" } else { "bg-gray-300" }
}

#[component]
fn Segment(filled: bool, label: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "w-8 h-8 rounded-full flex items-center justify-center text-white {}",
            fill(filled),
        )>{label}</div>
    }
}

#[component]
fn Connector(filled: bool) -> impl IntoView {
    view! { <div class=format!("w-12 h-1 {}", fill(filled))></div> }
}

/// Three numbered segments joined by two connectors.
#[component]
pub fn ProgressIndicator(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    view! {
        <div class="mb-6 flex justify-center" aria-label="Registration progress">
            {move || {
                let Progress { segments: [email, code, password], connectors: [first, second] } =
                    progress.get();
                view! {
                    <div class="flex items-center">
                        <Segment filled=email label="1" />
                        <Connector filled=first />
                        <Segment filled=code label="2" />
                        <Connector filled=second />
                        <Segment filled=password label="3" />
                    </div>
                }
            }}
        </div>
    }
}
