//! Registration route. Holds the [`Wizard`] in a signal and renders the step
//! it is at; each step component owns its form and hands back a proof when it
//! succeeds. Leaving a step unmounts it, which drops its form state and stops
//! its timers.

mod email_step;
mod otp_step;
mod password_step;
mod progress;
mod success_step;

use self::{
    email_step::EmailStep, otp_step::OtpStep, password_step::PasswordStep,
    progress::ProgressIndicator, success_step::SuccessStep,
};
use crate::{
    registration::{
        AccountCreated, CodeVerified, EmailVerified, SimulatedService, StepKind, TimerDelay,
        Wizard, WizardError,
    },
    web::{components::PortalShell, config::AppConfig},
};
use leptos::prelude::*;
use tracing::warn;

pub(crate) type Service = SimulatedService<TimerDelay>;

fn advance(wizard: RwSignal<Wizard>, step: impl FnOnce(&mut Wizard) -> Result<(), WizardError>) {
    wizard.update(|wizard| {
        if let Err(err) = step(wizard) {
            warn!(%err, "registration proof rejected");
        }
    });
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = AppConfig::load();
    let service = config.service();
    let cooldown_secs = config.resend_cooldown_secs;

    let wizard = RwSignal::new(Wizard::new());
    let kind = Memo::new(move |_| wizard.with(Wizard::kind));
    let progress = Signal::derive(move || wizard.with(Wizard::progress));
    let verified_email =
        move || wizard.with_untracked(|wizard| wizard.email().unwrap_or_default().to_string());

    let on_email_verified = Callback::new(move |proof: EmailVerified| {
        advance(wizard, |wizard| wizard.complete_email(proof));
    });
    let on_code_verified = Callback::new(move |proof: CodeVerified| {
        advance(wizard, |wizard| wizard.complete_otp(proof));
    });
    let on_account_created = Callback::new(move |proof: AccountCreated| {
        advance(wizard, |wizard| wizard.complete_password(proof));
    });

    view! {
        <PortalShell>
            <div class="max-w-md w-full bg-white/90 backdrop-blur-sm rounded-xl shadow-2xl p-8 md:p-10 overflow-hidden">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-blue-800 mb-2">"Join Our School"</h1>
                    <p class="text-gray-600">"Create your account to get started"</p>
                </div>

                <ProgressIndicator progress=progress />

                {move || match kind.get() {
                    StepKind::Email => {
                        view! { <EmailStep service=service.clone() on_verified=on_email_verified /> }
                            .into_any()
                    }
                    StepKind::Otp => {
                        view! {
                            <OtpStep
                                service=service.clone()
                                email=verified_email()
                                cooldown_secs=cooldown_secs
                                on_verified=on_code_verified
                            />
                        }
                            .into_any()
                    }
                    StepKind::Password => {
                        view! {
                            <PasswordStep
                                service=service.clone()
                                email=verified_email()
                                on_created=on_account_created
                            />
                        }
                            .into_any()
                    }
                    StepKind::Success => view! { <SuccessStep email=verified_email() /> }.into_any(),
                }}
            </div>
        </PortalShell>
    }
}
