//! Code entry across six cells. DOM focus follows [`OtpCells::focus`]; every
//! keystroke, paste and click is forwarded to the form, which decides what the
//! cells hold and where focus goes.
//!
//! [`OtpCells::focus`]: crate::registration::OtpCells::focus

use super::Service;
use crate::{
    registration::{CodeVerified, OTP_LENGTH, OtpForm, VerificationService, countdown::TICK_PERIOD},
    web::components::Button,
};
use leptos::{
    ev::{ClipboardEvent, Event, KeyboardEvent, SubmitEvent},
    html,
    leptos_dom::helpers::set_interval_with_handle,
    prelude::*,
};
use web_sys::HtmlInputElement;

#[component]
pub fn OtpStep(
    service: Service,
    email: String,
    cooldown_secs: u32,
    on_verified: Callback<CodeVerified>,
) -> impl IntoView {
    let form = RwSignal::new(OtpForm::with_cooldown(cooldown_secs));
    let inputs: [NodeRef<html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());
    let focus = Memo::new(move |_| form.with(|form| form.cells().focus()));

    Effect::new(move |_| {
        let index = focus.get();
        if let Some(input) = inputs.get(index).and_then(|input| input.get()) {
            let _ = input.focus();
        }
    });

    // Stopped on unmount so no tick outlives the step.
    if let Ok(handle) = set_interval_with_handle(
        move || {
            form.try_update(OtpForm::tick);
        },
        TICK_PERIOD,
    ) {
        on_cleanup(move || handle.clear());
    }

    let verify_action = {
        let email = email.clone();
        Action::new_local(move |code: &String| {
            let code = code.clone();
            let email = email.clone();
            let service = service.clone();
            async move { service.verify_code(&email, &code).await }
        })
    };

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            if let Some(Ok(proof)) = form.try_update(|form| form.finish_verify(result)) {
                on_verified.run(proof);
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(Ok(code)) = form.try_update(OtpForm::begin_verify) {
            verify_action.dispatch(code);
        }
    };

    let invalid = move || form.with(|form| form.error().is_some());
    let remaining = move || form.with(|form| form.cooldown().remaining());

    let cells = inputs
        .iter()
        .copied()
        .enumerate()
        .map(|(index, node_ref)| {
            let digit = move || {
                form.with(|form| form.cells().cell(index).map(String::from).unwrap_or_default())
            };

            let on_input = move |event: Event| {
                let raw = event_target_value(&event);
                let accepted = form.try_update(|form| form.input(index, &raw)).unwrap_or(false);
                if !accepted {
                    event_target::<HtmlInputElement>(&event).set_value(&digit());
                }
            };

            let on_keydown = move |event: KeyboardEvent| {
                if event.key() == "Backspace" {
                    form.update(|form| form.backspace(index));
                }
            };

            let on_paste = move |event: ClipboardEvent| {
                if index != 0 {
                    return;
                }
                event.prevent_default();
                let text = event
                    .clipboard_data()
                    .and_then(|data| data.get_data("text").ok())
                    .unwrap_or_default();
                form.update(|form| {
                    form.paste(&text);
                });
            };

            view! {
                <div class="w-full relative">
                    <input
                        node_ref=node_ref
                        id=format!("otp-input-{index}")
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        maxlength="1"
                        aria-label=format!("Digit {}", index + 1)
                        class="w-full text-center text-xl h-14 rounded-lg border transition-all duration-200"
                        class:border-red-500=invalid
                        class:bg-blue-50=move || !digit().is_empty()
                        prop:value=digit
                        on:input=on_input
                        on:keydown=on_keydown
                        on:paste=on_paste
                        on:focus=move |_| form.update(|form| form.focus_cell(index))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div class="text-center mb-4">
                <div class="flex items-center justify-center gap-2 mb-2">
                    <span class="text-gray-700 font-medium">{email}</span>
                </div>
                <p class="text-sm text-gray-600">
                    "Please enter the 6-digit code sent to your email"
                </p>
            </div>

            <div class="space-y-2">
                <label for="otp-input-0" class="sr-only">"OTP Code"</label>
                <div class="flex justify-between gap-2">{cells}</div>
                {move || {
                    form.with(|form| form.error().map(ToString::to_string))
                        .map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
                }}
            </div>

            <Button
                button_type="submit"
                disabled=Signal::derive(move || !form.with(OtpForm::can_submit))
                busy=Signal::derive(move || form.with(OtpForm::is_busy))
                busy_label="Verifying..."
            >
                "Verify Code"
            </Button>

            <div class="text-center">
                <p class="text-sm text-gray-600 mb-1">"Didn't receive the code?"</p>
                <button
                    type="button"
                    class="text-blue-600 hover:text-blue-800 hover:bg-blue-50 text-sm p-1 rounded disabled:text-gray-400 disabled:hover:bg-transparent"
                    disabled=move || !form.with(OtpForm::can_resend)
                    on:click=move |_| form.update(OtpForm::resend)
                >
                    {move || match remaining() {
                        0 => "Resend Code".to_string(),
                        seconds => format!("Resend in {seconds}s"),
                    }}
                </button>
            </div>
        </form>
    }
}
