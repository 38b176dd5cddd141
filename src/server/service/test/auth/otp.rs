use super::*;

/// Tests issuing a one-time password and redeeming it.
///
/// Expected: code mailed with U-OTP, redeemable once
#[tokio::test]
async fn issues_and_verifies_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut fixture = AuthFixture::new();

    factory::user::create_user_with_credentials(db, "a@x.com", "p1").await?;

    let code = fixture.service(db).issue_otp("a@x.com").await?.unwrap();

    let sent = fixture.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].code, email::ONE_TIME_PASSWORD);
    assert_eq!(sent[0].get("otp"), Some(code.as_str()));

    let service = fixture.service(db);
    assert!(service.verify_otp("a@x.com", &code).await);
    assert!(!service.verify_otp("a@x.com", &code).await);

    Ok(())
}

/// Tests issuing a code for an unknown login id.
///
/// Expected: Ok(None) and no email queued
#[tokio::test]
async fn unknown_login_gets_no_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut fixture = AuthFixture::new();

    assert!(fixture.service(db).issue_otp("ghost@x.com").await?.is_none());
    assert!(fixture.sent().is_empty());

    Ok(())
}
