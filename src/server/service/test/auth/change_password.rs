use super::*;

async fn setup(db: &DatabaseConnection) -> Result<ActorContext, AppError> {
    let account = factory::user::create_user_with_credentials(db, "a@x.com", "p1").await?;
    Ok(ActorContext::from_user(&User::from_entity(account)))
}

/// Tests changing the password with the correct current password.
///
/// Expected: Ok(true), password stored and U-CP queued
#[tokio::test]
async fn changes_with_matching_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut fixture = AuthFixture::new();
    let ctx = setup(db).await?;

    assert!(fixture.service(db).change_password("p1", "p2", &ctx).await?);

    let stored = UserRepository::new(db).find_by_login_id("a@x.com").await?.unwrap();
    assert_eq!(stored.password, "p2");

    let sent = fixture.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].code, email::CHANGE_PASSWORD);

    Ok(())
}

/// Tests that a wrong current password changes nothing.
///
/// Expected: Ok(false), password kept, no email
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut fixture = AuthFixture::new();
    let ctx = setup(db).await?;

    assert!(!fixture.service(db).change_password("nope", "p2", &ctx).await?);

    let stored = UserRepository::new(db).find_by_login_id("a@x.com").await?.unwrap();
    assert_eq!(stored.password, "p1");
    assert!(fixture.sent().is_empty());

    Ok(())
}

/// Tests changing the password for a caller whose account is gone.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_caller_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = AuthFixture::new();

    let result = fixture
        .service(db)
        .change_password("p1", "p2", &ActorContext::system())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
