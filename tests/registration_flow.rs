use scholaris::registration::{
    EmailForm, NoDelay, OtpForm, PasswordForm, RegistrationError, SimulatedService, StepKind,
    Strength, TokioDelay, Wizard, validate_email,
};
use std::time::Duration;

fn type_code(form: &mut OtpForm, code: &str) {
    for (index, digit) in code.chars().enumerate() {
        assert!(form.input(index, &digit.to_string()));
    }
}

#[tokio::test]
async fn walks_the_wizard_from_email_to_success() -> anyhow::Result<()> {
    let service = SimulatedService::new(NoDelay);
    let mut wizard = Wizard::new();

    let mut email = EmailForm::new("ana@school.edu");
    wizard.complete_email(email.submit(&service).await?)?;
    assert_eq!(wizard.kind(), StepKind::Otp);
    assert!(wizard.email_verified());

    let mut otp = OtpForm::new();
    assert!(otp.paste("123456"));
    let email_address = wizard.email().unwrap_or_default().to_string();
    wizard.complete_otp(otp.verify(&service, &email_address).await?)?;
    assert_eq!(wizard.kind(), StepKind::Password);
    assert!(wizard.otp_verified());

    let mut password = PasswordForm::new();
    password.set_password("longenough1");
    password.set_confirm("longenough1");
    assert_eq!(password.strength(), Strength::Strong);
    wizard.complete_password(password.register(&service, &email_address).await?)?;

    assert_eq!(wizard.kind(), StepKind::Success);
    assert_eq!(wizard.email(), Some("ana@school.edu"));
    Ok(())
}

#[tokio::test]
async fn wrong_code_keeps_the_wizard_at_the_code_step() -> anyhow::Result<()> {
    let service = SimulatedService::new(NoDelay);
    let mut wizard = Wizard::new();
    wizard.complete_email(EmailForm::new("ana@school.edu").submit(&service).await?)?;

    let mut otp = OtpForm::new();
    for code in ["000000", "123457", "654321"] {
        otp.resend();
        type_code(&mut otp, code);
        assert_eq!(
            otp.verify(&service, "ana@school.edu").await,
            Err(RegistrationError::CodeMismatch)
        );
        assert_eq!(otp.cells().code(), code);
        assert_eq!(wizard.kind(), StepKind::Otp);
    }

    otp.resend();
    type_code(&mut otp, "123456");
    wizard.complete_otp(otp.verify(&service, "ana@school.edu").await?)?;
    assert_eq!(wizard.kind(), StepKind::Password);
    Ok(())
}

#[test]
fn edits_during_sending_do_not_reach_the_wizard() -> anyhow::Result<()> {
    let mut wizard = Wizard::new();
    let mut email = EmailForm::new("ana@school.edu");

    let sent = email.begin_submit()?;
    email.set_value("not an email");
    wizard.complete_email(email.finish_submit(Ok(()))?)?;

    assert_eq!(wizard.kind(), StepKind::Otp);
    assert_eq!(wizard.email(), Some(sent.as_str()));
    assert!(wizard.email().is_some_and(|address| validate_email(address).is_ok()));
    Ok(())
}

#[tokio::test]
async fn invalid_email_never_leaves_the_first_step() {
    let service = SimulatedService::new(NoDelay);
    let wizard = Wizard::new();

    for address in ["", "ana", "ana@school", "ana @school.edu"] {
        let mut email = EmailForm::new(address);
        assert_eq!(
            email.submit(&service).await,
            Err(RegistrationError::InvalidEmail)
        );
    }
    assert_eq!(wizard.kind(), StepKind::Email);
}

#[tokio::test(start_paused = true)]
async fn simulated_requests_take_the_configured_latency() -> anyhow::Result<()> {
    let service = SimulatedService::new(TokioDelay).with_latency(Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    let proof = EmailForm::new("ana@school.edu").submit(&service).await?;
    assert_eq!(proof.email(), "ana@school.edu");
    assert!(started.elapsed() >= Duration::from_millis(1500));
    Ok(())
}
