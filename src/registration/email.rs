//! Email step: local format check, then a code is sent to the address.

use super::{
    error::{RegistrationError, ServiceError},
    service::VerificationService,
    wizard::EmailVerified,
};
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace, a single `@`, a dot in the domain part.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Basic email format check.
///
/// # Errors
/// Returns [`RegistrationError::InvalidEmail`] when `email` does not look like an address.
pub fn validate_email(email: &str) -> Result<(), RegistrationError> {
    if EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email))
    {
        Ok(())
    } else {
        Err(RegistrationError::InvalidEmail)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailForm {
    value: String,
    error: Option<RegistrationError>,
    // Address that passed validation and is being sent; set while busy.
    pending: Option<String>,
}

impl EmailForm {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn error(&self) -> Option<&RegistrationError> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Once an error is shown, every edit re-checks the format so the message
    /// disappears as soon as the address becomes valid. Ignored while busy.
    pub fn set_value(&mut self, value: impl Into<String>) {
        if self.is_busy() {
            return;
        }
        self.value = value.into();
        if self.error.is_some() && validate_email(&self.value).is_ok() {
            self.error = None;
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.value.is_empty() && !self.is_busy()
    }

    /// Validates and enters the busy state. Returns the address to send the code to.
    ///
    /// # Errors
    /// [`RegistrationError::Busy`] while a request is in flight, or
    /// [`RegistrationError::InvalidEmail`] (also shown inline) for a malformed address.
    pub fn begin_submit(&mut self) -> Result<String, RegistrationError> {
        if self.is_busy() {
            return Err(RegistrationError::Busy);
        }
        if let Err(err) = validate_email(&self.value) {
            self.error = Some(err.clone());
            return Err(err);
        }
        self.error = None;
        self.pending = Some(self.value.clone());
        Ok(self.value.clone())
    }

    /// Leaves the busy state with the outcome of the send request. The proof
    /// carries the address validated by [`Self::begin_submit`].
    ///
    /// # Errors
    /// Returns the service failure, which is also shown inline, or
    /// [`RegistrationError::InvalidEmail`] when no submission is in flight.
    pub fn finish_submit(
        &mut self,
        result: Result<(), ServiceError>,
    ) -> Result<EmailVerified, RegistrationError> {
        let pending = self.pending.take();
        match result {
            Ok(()) => pending
                .map(EmailVerified::new)
                .ok_or(RegistrationError::InvalidEmail),
            Err(err) => {
                let err = RegistrationError::from(err);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Validates the address and asks `service` to send a code to it.
    ///
    /// # Errors
    /// Any error from [`Self::begin_submit`] or [`Self::finish_submit`].
    pub async fn submit<S: VerificationService>(
        &mut self,
        service: &S,
    ) -> Result<EmailVerified, RegistrationError> {
        let email = self.begin_submit()?;
        let result = service.send_verification_code(&email).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::service::{NoDelay, SimulatedService};

    #[test]
    fn validate_email_accepts_basic_format() {
        assert!(validate_email("a@example.com").is_ok());
        assert!(validate_email("name.surname@school.co.uk").is_ok());
        assert!(validate_email("x@y.z").is_ok());
    }

    #[test]
    fn validate_email_rejects_malformed_input() {
        for input in [
            "",
            "plain",
            "missing@tld",
            "@school.edu",
            "two@@school.edu",
            "a@b@school.edu",
            "space in@school.edu",
            "tab@school\t.edu",
            "trailing@school.",
            "ana@.edu",
        ] {
            assert_eq!(
                validate_email(input),
                Err(RegistrationError::InvalidEmail),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_submission_shows_error_and_stays_idle() {
        let mut form = EmailForm::new("not-an-email");
        assert_eq!(form.begin_submit(), Err(RegistrationError::InvalidEmail));
        assert_eq!(form.error(), Some(&RegistrationError::InvalidEmail));
        assert!(!form.is_busy());
    }

    #[test]
    fn editing_clears_the_error_once_valid() {
        let mut form = EmailForm::new("ana@");
        assert!(form.begin_submit().is_err());

        form.set_value("ana@school");
        assert_eq!(form.error(), Some(&RegistrationError::InvalidEmail));

        form.set_value("ana@school.edu");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn proof_carries_the_address_that_was_sent() {
        let mut form = EmailForm::new("ana@school.edu");
        assert_eq!(form.begin_submit(), Ok("ana@school.edu".to_string()));

        form.set_value("not an email");
        assert_eq!(form.value(), "ana@school.edu");

        let proof = form.finish_submit(Ok(()));
        assert_eq!(proof.as_ref().map(EmailVerified::email), Ok("ana@school.edu"));
        assert!(!form.is_busy());

        form.set_value("eve@school.edu");
        assert_eq!(form.value(), "eve@school.edu");
    }

    #[test]
    fn finishing_without_a_submission_yields_no_proof() {
        let mut form = EmailForm::new("not an email");
        assert_eq!(
            form.finish_submit(Ok(())),
            Err(RegistrationError::InvalidEmail)
        );
    }

    #[test]
    fn submit_control_requires_a_value_and_idle_form() {
        let mut form = EmailForm::default();
        assert!(!form.can_submit());

        form.set_value("ana@school.edu");
        assert!(form.can_submit());

        assert_eq!(form.begin_submit(), Ok("ana@school.edu".to_string()));
        assert!(form.is_busy());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(RegistrationError::Busy));
    }

    #[test]
    fn service_failure_is_shown_and_releases_busy() {
        let mut form = EmailForm::new("ana@school.edu");
        assert!(form.begin_submit().is_ok());

        let result = form.finish_submit(Err(ServiceError::Unavailable("down".to_string())));
        assert!(matches!(result, Err(RegistrationError::Service(_))));
        assert!(!form.is_busy());
        assert!(form.error().is_some());
    }

    #[tokio::test]
    async fn submit_produces_proof_for_the_entered_address() {
        let service = SimulatedService::new(NoDelay);
        let mut form = EmailForm::new("ana@school.edu");

        let proof = form.submit(&service).await;
        assert_eq!(proof.as_ref().map(EmailVerified::email), Ok("ana@school.edu"));
        assert!(!form.is_busy());
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn submit_never_calls_the_service_for_malformed_input() {
        let service = SimulatedService::new(NoDelay);
        let mut form = EmailForm::new("ana school.edu");
        assert_eq!(
            form.submit(&service).await,
            Err(RegistrationError::InvalidEmail)
        );
    }
}
