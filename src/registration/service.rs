//! Verification collaborators used by the wizard steps.
//!
//! A production deployment talks to a real issuance backend through
//! [`VerificationService`]. Until one exists, [`SimulatedService`] accepts every
//! email and account after a fixed latency and checks codes against a single
//! accepted value. The latency goes through a [`Delay`] so native code, the
//! browser and tests can each supply their own clock.

use super::{error::ServiceError, otp::ACCEPTED_CODE};
use secrecy::SecretString;
use std::{future::Future, time::Duration};
use tracing::debug;

/// Latency applied to every simulated request.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Outcome of a code check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeCheck {
    Valid,
    Invalid,
}

/// Backend contract for the registration flow.
pub trait VerificationService {
    /// Issue a one-time code to `email`.
    fn send_verification_code(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<(), ServiceError>>;

    /// Check `code` against the one issued to `email`.
    fn verify_code(
        &self,
        email: &str,
        code: &str,
    ) -> impl Future<Output = Result<CodeCheck, ServiceError>>;

    /// Create the account once both verifications passed.
    fn create_account(
        &self,
        email: &str,
        password: &SecretString,
    ) -> impl Future<Output = Result<(), ServiceError>>;
}

/// Suspends the current task for a duration.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Resolves immediately. Used by tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[cfg(not(target_arch = "wasm32"))]
impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Browser timer backed delay.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

#[cfg(target_arch = "wasm32")]
impl Delay for TimerDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

/// Stand-in backend: every call succeeds after `latency`, except code checks
/// which only accept `accepted_code`.
#[derive(Clone, Debug)]
pub struct SimulatedService<D> {
    delay: D,
    latency: Duration,
    accepted_code: String,
}

impl<D: Delay> SimulatedService<D> {
    #[must_use]
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            latency: SIMULATED_LATENCY,
            accepted_code: ACCEPTED_CODE.to_string(),
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn with_accepted_code(mut self, code: impl Into<String>) -> Self {
        self.accepted_code = code.into();
        self
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl<D: Delay> VerificationService for SimulatedService<D> {
    async fn send_verification_code(&self, _email: &str) -> Result<(), ServiceError> {
        debug!(latency_ms = self.latency.as_millis(), "simulating code delivery");
        self.delay.sleep(self.latency).await;
        Ok(())
    }

    async fn verify_code(&self, _email: &str, code: &str) -> Result<CodeCheck, ServiceError> {
        self.delay.sleep(self.latency).await;
        let check = if code == self.accepted_code {
            CodeCheck::Valid
        } else {
            CodeCheck::Invalid
        };
        debug!(?check, "simulated code check");
        Ok(check)
    }

    async fn create_account(
        &self,
        _email: &str,
        _password: &SecretString,
    ) -> Result<(), ServiceError> {
        debug!(latency_ms = self.latency.as_millis(), "simulating account creation");
        self.delay.sleep(self.latency).await;
        Ok(())
    }
}
