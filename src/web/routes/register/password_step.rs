use super::Service;
use crate::{
    registration::{AccountCreated, PasswordForm, Strength, VerificationService},
    web::components::Button,
};
use leptos::{ev::SubmitEvent, prelude::*};
use secrecy::{ExposeSecret, SecretString};

const fn strength_colors(strength: Strength) -> (&'static str, &'static str) {
    match strength {
        Strength::Empty => ("text-gray-500", "bg-gray-200"),
        Strength::Weak => ("text-red-600", "bg-red-500"),
        Strength::Medium => ("text-yellow-600", "bg-yellow-500"),
        Strength::Strong => ("text-green-600", "bg-green-500"),
    }
}

#[component]
pub fn PasswordStep(
    service: Service,
    email: String,
    on_created: Callback<AccountCreated>,
) -> impl IntoView {
    let form = RwSignal::new(PasswordForm::new());
    let strength = Memo::new(move |_| form.with(PasswordForm::strength));
    let revealed = move || form.with(PasswordForm::is_revealed);
    let field_type = move || if revealed() { "text" } else { "password" };

    let register_action = {
        let email = email.clone();
        Action::new_local(move |password: &SecretString| {
            let password = SecretString::from(password.expose_secret().to_owned());
            let email = email.clone();
            let service = service.clone();
            async move { service.create_account(&email, &password).await }
        })
    };

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            if let Some(Ok(proof)) = form.try_update(|form| form.finish_register(result)) {
                on_created.run(proof);
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(Ok(password)) = form.try_update(PasswordForm::begin_register) {
            register_action.dispatch(password);
        }
    };

    let password_error =
        move || form.with(|form| form.errors().password().map(|err| err.to_string()));
    let confirm_error =
        move || form.with(|form| form.errors().confirm().map(|err| err.to_string()));

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div class="text-center mb-4">
                <div class="flex items-center justify-center gap-2 mb-2">
                    <span class="text-gray-700 font-medium">{email}</span>
                </div>
                <p class="text-sm text-gray-600">"Create a secure password for your account"</p>
            </div>

            <div class="space-y-4">
                <div class="space-y-2">
                    <label for="password" class="text-gray-700 font-medium block">
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            id="password"
                            type=field_type
                            autocomplete="new-password"
                            class="w-full rounded-lg border px-3 py-2.5 pr-16 text-sm"
                            class:border-red-500=move || password_error().is_some()
                            on:input=move |event| {
                                form.update(|form| form.set_password(event_target_value(&event)));
                            }
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-1/2 -translate-y-1/2 text-xs font-medium text-gray-500"
                            aria-pressed=move || revealed().to_string()
                            on:click=move |_| form.update(PasswordForm::toggle_reveal)
                        >
                            {move || if revealed() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || {
                        password_error()
                            .map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
                    }}

                    <div class="mt-2 space-y-1">
                        <div class="flex items-center justify-between text-sm">
                            <span>"Password strength:"</span>
                            <span class=move || strength_colors(strength.get()).0>
                                {move || strength.get().label()}
                            </span>
                        </div>
                        <div class="h-1 w-full bg-gray-200 rounded-full overflow-hidden">
                            <div
                                class=move || {
                                    format!(
                                        "h-full transition-all duration-300 {}",
                                        strength_colors(strength.get()).1,
                                    )
                                }
                                style:width=move || format!("{}%", strength.get().percent())
                            ></div>
                        </div>
                    </div>
                </div>

                <div class="space-y-2">
                    <label for="confirm_password" class="text-gray-700 font-medium block">
                        "Confirm Password"
                    </label>
                    <input
                        id="confirm_password"
                        type=field_type
                        autocomplete="new-password"
                        class="w-full rounded-lg border px-3 py-2.5 text-sm"
                        class:border-red-500=move || confirm_error().is_some()
                        on:input=move |event| {
                            form.update(|form| form.set_confirm(event_target_value(&event)));
                        }
                    />
                    {move || {
                        confirm_error()
                            .map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
                    }}
                </div>
            </div>

            <Button
                button_type="submit"
                disabled=Signal::derive(move || !form.with(PasswordForm::can_submit))
                busy=Signal::derive(move || form.with(PasswordForm::is_busy))
                busy_label="Registering..."
            >
                "Register Account"
            </Button>

            <p class="text-center text-sm text-gray-500">
                "Your password is stored as a secret and never logged"
            </p>
        </form>
    }
}
