use super::Service;
use crate::{
    registration::{EmailForm, EmailVerified, VerificationService},
    web::components::Button,
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn EmailStep(service: Service, on_verified: Callback<EmailVerified>) -> impl IntoView {
    let form = RwSignal::new(EmailForm::default());

    let send_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        let service = service.clone();
        async move { service.send_verification_code(&email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            if let Some(Ok(proof)) = form.try_update(|form| form.finish_submit(result)) {
                on_verified.run(proof);
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(Ok(email)) = form.try_update(EmailForm::begin_submit) {
            send_action.dispatch(email);
        }
    };

    let error = move || form.with(|form| form.error().map(ToString::to_string));

    view! {
        <form class="space-y-6" on:submit=on_submit novalidate>
            <div class="space-y-2">
                <label for="email" class="text-gray-700 font-medium block">
                    "Email Address"
                </label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    class="w-full rounded-lg border px-3 py-2.5 text-sm"
                    class:border-red-500=move || error().is_some()
                    class:border-gray-300=move || error().is_none()
                    prop:value=move || form.with(|form| form.value().to_string())
                    prop:disabled=move || form.with(EmailForm::is_busy)
                    on:input=move |event| {
                        form.update(|form| form.set_value(event_target_value(&event)));
                    }
                />
                {move || {
                    error().map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
                }}
            </div>

            <Button
                button_type="submit"
                disabled=Signal::derive(move || !form.with(EmailForm::can_submit))
                busy=Signal::derive(move || form.with(EmailForm::is_busy))
                busy_label="Verifying..."
            >
                "Verify Email"
            </Button>

            <p class="text-sm text-gray-500 text-center">
                "We'll send a verification code to this email"
            </p>
        </form>
    }
}
