//! Registration wizard state machine.
//!
//! The wizard moves strictly forward: `Email -> Otp -> Password -> Success`.
//! Each transition consumes a proof value that only the corresponding step can
//! produce after its guard passed, so a step cannot be skipped and no event
//! leads back to an earlier step. The verified flags are derived from the
//! current variant instead of being stored next to it.

use super::error::WizardError;
use std::fmt;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepKind {
    Email,
    Otp,
    Password,
    Success,
}

impl StepKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Otp => "otp",
            Self::Password => "password",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Current wizard stage. Every stage after `Email` carries the verified address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Email,
    Otp { email: String },
    Password { email: String },
    Success { email: String },
}

impl Step {
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        match self {
            Self::Email => StepKind::Email,
            Self::Otp { .. } => StepKind::Otp,
            Self::Password { .. } => StepKind::Password,
            Self::Success { .. } => StepKind::Success,
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Email => None,
            Self::Otp { email } | Self::Password { email } | Self::Success { email } => {
                Some(email.as_str())
            }
        }
    }
}

/// Proof that the email step accepted an address and a code was sent to it.
#[derive(Debug, PartialEq, Eq)]
pub struct EmailVerified {
    email: String,
}

impl EmailVerified {
    pub(crate) const fn new(email: String) -> Self {
        Self { email }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Proof that the entered code matched.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeVerified(());

impl CodeVerified {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

/// Proof that the account was created.
#[derive(Debug, PartialEq, Eq)]
pub struct AccountCreated(());

impl AccountCreated {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

/// Fill state of the three step indicator and its two connectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub segments: [bool; 3],
    pub connectors: [bool; 2],
}

impl Progress {
    /// Computes the indicator from the current step and the two verified flags.
    #[must_use]
    pub fn compute(step: StepKind, email_verified: bool, otp_verified: bool) -> Self {
        let first = step == StepKind::Email || email_verified;
        let second = step >= StepKind::Otp || otp_verified;
        let third = step >= StepKind::Password;

        Self {
            segments: [first, second, third],
            connectors: [second, third],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step: Step,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    #[must_use]
    pub const fn new() -> Self {
        Self { step: Step::Email }
    }

    #[must_use]
    pub const fn step(&self) -> &Step {
        &self.step
    }

    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.step.kind()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.step.email()
    }

    #[must_use]
    pub const fn email_verified(&self) -> bool {
        matches!(
            self.step,
            Step::Otp { .. } | Step::Password { .. } | Step::Success { .. }
        )
    }

    #[must_use]
    pub const fn otp_verified(&self) -> bool {
        matches!(self.step, Step::Password { .. } | Step::Success { .. })
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::compute(self.kind(), self.email_verified(), self.otp_verified())
    }

    /// `Email -> Otp`.
    ///
    /// # Errors
    /// Returns [`WizardError::OutOfOrder`] unless the wizard is at the email step.
    pub fn complete_email(&mut self, proof: EmailVerified) -> Result<(), WizardError> {
        self.require(StepKind::Email)?;
        self.advance(Step::Otp { email: proof.email });
        Ok(())
    }

    /// `Otp -> Password`.
    ///
    /// # Errors
    /// Returns [`WizardError::OutOfOrder`] unless the wizard is at the code step.
    pub fn complete_otp(&mut self, _proof: CodeVerified) -> Result<(), WizardError> {
        let email = self.require(StepKind::Otp)?;
        self.advance(Step::Password { email });
        Ok(())
    }

    /// `Password -> Success`.
    ///
    /// # Errors
    /// Returns [`WizardError::OutOfOrder`] unless the wizard is at the password step.
    pub fn complete_password(&mut self, _proof: AccountCreated) -> Result<(), WizardError> {
        let email = self.require(StepKind::Password)?;
        self.advance(Step::Success { email });
        Ok(())
    }

    // Returns the carried email (empty at the email step).
    fn require(&self, expected: StepKind) -> Result<String, WizardError> {
        let current = self.kind();
        if current == expected {
            Ok(self.email().unwrap_or_default().to_string())
        } else {
            Err(WizardError::OutOfOrder { expected, current })
        }
    }

    fn advance(&mut self, next: Step) {
        let from = self.kind();
        self.step = next;
        info!(from = %from, to = %self.kind(), "registration step advanced");
    }
}
