use crate::web::{components::PortalShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PortalShell>
            <div class="max-w-md w-full text-center space-y-6">
                <h1 class="text-3xl font-bold text-gray-800">"School Management System"</h1>
                <p class="text-gray-600">
                    "Welcome to our school management system. Please register to get started."
                </p>
                <div class="flex justify-center">
                    <A
                        href=paths::REGISTER
                        {..}
                        class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-4 rounded-lg text-lg font-medium"
                    >
                        "Register Now"
                    </A>
                </div>
                <p class="text-sm text-gray-600">
                    "Already have an account? "
                    <A href=paths::LOGIN {..} class="text-blue-600 hover:text-blue-800 font-medium">
                        "Sign in"
                    </A>
                </p>
            </div>
        </PortalShell>
    }
}
