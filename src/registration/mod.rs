//! # Registration
//!
//! Platform-neutral core of the account registration wizard. Each step owns a
//! form model that validates input locally, talks to a [`VerificationService`]
//! and hands a proof value to the [`Wizard`] when it succeeds:
//!
//! - [`EmailForm`] checks the address format and asks for a code.
//! - [`OtpForm`] collects six digits, handles paste and focus, and runs the
//!   resend cooldown.
//! - [`PasswordForm`] enforces the length and confirmation rules and reports
//!   an advisory [`Strength`].
//!
//! Nothing here touches the DOM; the browser UI in `web` and the tests drive the
//! same types.

pub mod countdown;
pub mod email;
pub mod error;
pub mod otp;
pub mod password;
pub mod service;
pub mod wizard;

pub use self::{
    countdown::{Countdown, RESEND_COOLDOWN_SECS},
    email::{EmailForm, validate_email},
    error::{PasswordErrors, RegistrationError, ServiceError, WizardError},
    otp::{ACCEPTED_CODE, OTP_LENGTH, OtpCells, OtpForm},
    password::{MIN_PASSWORD_LENGTH, PasswordEntry, PasswordForm, Strength},
    service::{CodeCheck, Delay, NoDelay, SIMULATED_LATENCY, SimulatedService, VerificationService},
    wizard::{AccountCreated, CodeVerified, EmailVerified, Progress, Step, StepKind, Wizard},
};

#[cfg(not(target_arch = "wasm32"))]
pub use self::{countdown::CooldownTicker, service::TokioDelay};

#[cfg(target_arch = "wasm32")]
pub use self::service::TimerDelay;
