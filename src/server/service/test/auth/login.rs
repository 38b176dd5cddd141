use super::*;

/// Tests the wrong-then-right password scenario.
///
/// Verifies that a wrong password increments the counter without issuing a token
/// and that the correct password resets the counter and issues a verifiable token.
///
/// Expected: counter 1 after failure, 0 after success, token subject = login id
#[tokio::test]
async fn wrong_then_right_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = AuthFixture::new();

    factory::role::RoleFactory::new(db)
        .id(DEFAULT_MEMBER_ROLE_ID)
        .name("Student")
        .build()
        .await?;
    let account = factory::user::create_user_with_credentials(db, "a@x.com", "p1").await?;
    let service = fixture.service(db);

    assert!(service.login("a@x.com", "wrong").await?.is_none());
    let stored = entity::prelude::User::find_by_id(account.id).one(db).await?.unwrap();
    assert_eq!(stored.failed_login_attempts, 1);

    let outcome = service.login("a@x.com", "p1").await?.unwrap();
    assert_eq!(outcome.user.failed_login_attempts, 0);
    assert_eq!(outcome.role_name.as_deref(), Some("Student"));
    assert_eq!(fixture.tokens.verify(&outcome.token)?.sub, "a@x.com");

    let stored = entity::prelude::User::find_by_id(account.id).one(db).await?.unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.last_login.is_some());

    Ok(())
}

/// Tests that an unknown login id looks exactly like a wrong password.
///
/// Expected: Ok(None) and no account touched
#[tokio::test]
async fn unknown_login_id_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = AuthFixture::new();

    let other = factory::user::create_user(db).await?;

    let outcome = fixture.service(db).login("ghost@x.com", "p1").await?;

    assert!(outcome.is_none());
    let stored = entity::prelude::User::find_by_id(other.id).one(db).await?.unwrap();
    assert_eq!(stored.failed_login_attempts, 0);

    Ok(())
}

/// Tests that a login still succeeds when the account's role was removed.
///
/// Expected: Ok(Some) without a role name
#[tokio::test]
async fn missing_role_has_no_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = AuthFixture::new();

    factory::user::UserFactory::new(db)
        .login_id("a@x.com")
        .password("p1")
        .role_id(99)
        .build()
        .await?;

    let outcome = fixture.service(db).login("a@x.com", "p1").await?.unwrap();

    assert!(outcome.role_name.is_none());

    Ok(())
}
