//! Client-side error taxonomy for the registration wizard. Every variant is
//! recoverable: the owning step renders it inline and the user may retry.
//! `Display` strings are user-facing copy.

use super::{password::MIN_PASSWORD_LENGTH, wizard::StepKind};
use std::fmt;
use thiserror::Error;

/// Failures reported by a verification backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Verification service unavailable: {0}")]
    Unavailable(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Invalid code. Please try again.")]
    IncompleteCode { entered: usize },
    #[error("Invalid code. Please try again.")]
    CodeMismatch,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0}")]
    InvalidPassword(PasswordErrors),
    #[error("A request is already in progress")]
    Busy,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Both password rules are evaluated on every attempt, so either or both
/// may fail at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordErrors {
    pub too_short: bool,
    pub mismatch: bool,
}

impl PasswordErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.too_short && !self.mismatch
    }

    /// Error shown under the password field.
    #[must_use]
    pub fn password(&self) -> Option<RegistrationError> {
        self.too_short
            .then_some(RegistrationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            })
    }

    /// Error shown under the confirmation field.
    #[must_use]
    pub fn confirm(&self) -> Option<RegistrationError> {
        self.mismatch.then_some(RegistrationError::PasswordMismatch)
    }
}

impl fmt::Display for PasswordErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = [self.password(), self.confirm()]
            .into_iter()
            .flatten()
            .map(|err| err.to_string())
            .collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("cannot complete the {expected} step while at the {current} step")]
    OutOfOrder {
        expected: StepKind,
        current: StepKind,
    },
}
