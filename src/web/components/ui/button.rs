use super::Spinner;
use leptos::prelude::*;

/// Full width primary button. While `busy` the label is replaced by a spinner
/// and `busy_label`.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
    #[prop(optional)] busy_label: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let busy_label = busy_label.unwrap_or("Working...");

    view! {
        <button
            type=button_type
            class="w-full text-white bg-blue-600 hover:bg-blue-700 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center"
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
        >
            {move || {
                if busy.get() {
                    view! {
                        <span class="flex items-center justify-center gap-2">
                            <Spinner />
                            {busy_label}
                        </span>
                    }
                        .into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
