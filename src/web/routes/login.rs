//! Sign-in page. The form is presentational: there is no session backend, so
//! submitting only explains that sign-in is unavailable.

use crate::web::{
    components::{Alert, AlertKind, Button, PortalShell},
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use tracing::info;

const SIGN_IN_UNAVAILABLE: &str = "Sign in is not available yet. Please check back soon.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (notice, set_notice) = signal::<Option<&'static str>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        info!("sign in attempted without a session backend");
        set_notice.set(Some(SIGN_IN_UNAVAILABLE));
    };

    view! {
        <PortalShell>
            <div class="max-w-md w-full bg-white/90 backdrop-blur-sm rounded-xl shadow-2xl p-8 md:p-10">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-blue-800 mb-2">"Welcome Back"</h1>
                    <p class="text-gray-600">"Sign in to your account"</p>
                </div>

                <form class="space-y-6" on:submit=on_submit>
                    <div class="space-y-2">
                        <label for="email" class="block text-gray-700 font-medium">
                            "Email Address"
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            class="w-full rounded-lg border border-gray-300 px-3 py-2.5 text-sm"
                        />
                    </div>

                    <div class="space-y-2">
                        <div class="flex items-center justify-between">
                            <label for="password" class="text-gray-700 font-medium">
                                "Password"
                            </label>
                            <a href="/forgot-password" class="text-sm text-blue-600 hover:text-blue-800">
                                "Forgot password?"
                            </a>
                        </div>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            class="w-full rounded-lg border border-gray-300 px-3 py-2.5 text-sm"
                        />
                    </div>

                    <Button button_type="submit">"Sign In"</Button>
                </form>

                {move || {
                    notice
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Info message=message.to_string() />
                                </div>
                            }
                        })
                }}

                <div class="mt-6 text-center text-sm">
                    <p class="text-gray-600">
                        "Don't have an account? "
                        <A
                            href=paths::REGISTER
                            {..}
                            class="text-blue-600 hover:text-blue-800 font-medium"
                        >
                            "Register"
                        </A>
                    </p>
                </div>
            </div>
        </PortalShell>
    }
}
