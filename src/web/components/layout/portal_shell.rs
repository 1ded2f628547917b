//! Page chrome for every route: a header with the portal name and the two
//! public entry points, and a centered content area.

use crate::web::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn PortalShell(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;
    let on_path = move |path: &'static str| pathname.get() == path;

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-blue-50 to-indigo-100">
            <header class="border-b border-blue-100 bg-white/80 backdrop-blur">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="flex items-center gap-2">
                        <span class="font-semibold text-blue-800">"Scholaris"</span>
                    </A>
                    <nav class="flex items-center gap-6 text-sm font-medium">
                        <A
                            href=paths::LOGIN
                            {..}
                            class="text-gray-700 hover:text-blue-700"
                            class:text-blue-700=move || on_path(paths::LOGIN)
                        >
                            "Sign in"
                        </A>
                        <A
                            href=paths::REGISTER
                            {..}
                            class="text-gray-700 hover:text-blue-700"
                            class:text-blue-700=move || on_path(paths::REGISTER)
                        >
                            "Register"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="flex-1 flex items-center justify-center p-4">{children()}</main>
        </div>
    }
}
