//! Password step: length and confirmation rules plus an advisory strength meter.
//!
//! The strength label only looks at the length and is independent of the
//! validation outcome, so a valid 8 character password still reads "Medium".

use super::{
    error::{PasswordErrors, RegistrationError, ServiceError},
    service::VerificationService,
    wizard::AccountCreated,
};
use secrecy::{ExposeSecret, SecretString};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl Strength {
    #[must_use]
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => Self::Empty,
            1..=5 => Self::Weak,
            6..=9 => Self::Medium,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Fill of the strength meter.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Weak => 33,
            Self::Medium => 66,
            Self::Strong => 100,
        }
    }
}

#[derive(Debug, Default)]
pub struct PasswordEntry {
    password: SecretString,
    confirm: SecretString,
}

impl PasswordEntry {
    #[must_use]
    pub fn new(password: impl Into<String>, confirm: impl Into<String>) -> Self {
        Self {
            password: SecretString::from(password.into()),
            confirm: SecretString::from(confirm.into()),
        }
    }

    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }

    #[must_use]
    pub const fn confirm(&self) -> &SecretString {
        &self.confirm
    }
}

/// Checks both rules; each failing rule is reported.
///
/// # Errors
/// Returns the set of failed rules.
pub fn validate(entry: &PasswordEntry) -> Result<(), PasswordErrors> {
    let password = entry.password.expose_secret();
    let errors = PasswordErrors {
        too_short: password.chars().count() < MIN_PASSWORD_LENGTH,
        mismatch: password != entry.confirm.expose_secret(),
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Default)]
pub struct PasswordForm {
    entry: PasswordEntry,
    reveal: bool,
    errors: PasswordErrors,
    busy: bool,
}

impl PasswordForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn entry(&self) -> &PasswordEntry {
        &self.entry
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.entry.password = SecretString::from(value.into());
    }

    pub fn set_confirm(&mut self, value: impl Into<String>) {
        self.entry.confirm = SecretString::from(value.into());
    }

    /// Shows or hides both fields at once.
    pub const fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.reveal
    }

    #[must_use]
    pub fn strength(&self) -> Strength {
        Strength::of(self.entry.password.expose_secret())
    }

    #[must_use]
    pub const fn errors(&self) -> PasswordErrors {
        self.errors
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.entry.password.expose_secret().is_empty()
            && !self.entry.confirm.expose_secret().is_empty()
            && !self.busy
    }

    /// Validates both rules and enters the busy state. Returns a copy of the
    /// password for the account request.
    ///
    /// # Errors
    /// [`RegistrationError::Busy`] while a request is in flight, or
    /// [`RegistrationError::InvalidPassword`] with every failed rule shown inline.
    pub fn begin_register(&mut self) -> Result<SecretString, RegistrationError> {
        if self.busy {
            return Err(RegistrationError::Busy);
        }
        let outcome = validate(&self.entry);
        self.errors = outcome.err().unwrap_or_default();
        if !self.errors.is_empty() {
            return Err(RegistrationError::InvalidPassword(self.errors));
        }
        self.busy = true;
        Ok(SecretString::from(
            self.entry.password.expose_secret().to_owned(),
        ))
    }

    /// Leaves the busy state with the outcome of the account request.
    ///
    /// # Errors
    /// Returns the service failure.
    pub fn finish_register(
        &mut self,
        result: Result<(), ServiceError>,
    ) -> Result<AccountCreated, RegistrationError> {
        self.busy = false;
        result
            .map(|()| AccountCreated::new())
            .map_err(RegistrationError::from)
    }

    /// Validates and asks `service` to create the account for `email`.
    ///
    /// # Errors
    /// Any error from [`Self::begin_register`] or [`Self::finish_register`].
    pub async fn register<S: VerificationService>(
        &mut self,
        service: &S,
        email: &str,
    ) -> Result<AccountCreated, RegistrationError> {
        let password = self.begin_register()?;
        let result = service.create_account(email, &password).await;
        self.finish_register(result)
    }
}
