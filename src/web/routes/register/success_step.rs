use crate::web::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SuccessStep(email: String) -> impl IntoView {
    view! {
        <div class="text-center space-y-6">
            <div class="flex justify-center">
                <div class="h-24 w-24 rounded-full bg-green-100 flex items-center justify-center">
                    <svg class="h-12 w-12 text-green-600" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"></path>
                    </svg>
                </div>
            </div>

            <div>
                <h2 class="text-2xl font-bold text-gray-800 mb-2">"Registration Successful!"</h2>
                <p class="text-gray-600">"Your account has been created successfully."</p>
                <p class="text-sm text-gray-500 mt-2">
                    "A confirmation email has been sent to " {email}
                </p>
            </div>

            <div class="pt-4">
                <A
                    href=paths::LOGIN
                    {..}
                    class="inline-block bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg px-8 py-2.5"
                >
                    "Go to Login"
                </A>
            </div>
        </div>
    }
}
