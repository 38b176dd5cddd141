use super::*;

/// Tests updating profile fields of an account.
///
/// Verifies that an empty password keeps the stored one and that login
/// bookkeeping columns are left untouched.
///
/// Expected: Ok with names changed and password/counter preserved
#[tokio::test]
async fn updates_profile_and_keeps_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .login_id("a@x.com")
        .password("p1")
        .failed_login_attempts(2)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let mut record = new_user("a@x.com");
    record.id = Some(existing.id);
    record.first_name = "Grace".to_string();
    record.password = String::new();

    let ctx = ActorContext::system();
    repo.update(&record, &ctx).await?;

    let stored = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.first_name, "Grace");
    assert_eq!(stored.password, "p1");
    assert_eq!(stored.failed_login_attempts, 2);
    assert_eq!(stored.modified_by, "system");

    Ok(())
}

/// Tests that an update without a status keeps the stored one.
///
/// Expected: Ok with the account still "Inactive"
#[tokio::test]
async fn empty_status_keeps_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .login_id("a@x.com")
        .status("Inactive")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let mut record = new_user("a@x.com");
    record.id = Some(existing.id);
    record.status = String::new();

    repo.update(&record, &ActorContext::system()).await?;

    let stored = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Inactive");

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let mut record = new_user("a@x.com");
    record.id = Some(999);

    let result = repo.update(&record, &ActorContext::system()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests replacing the stored password and the profile image reference.
///
/// Expected: Ok with both columns changed
#[tokio::test]
async fn sets_password_and_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let ctx = ActorContext::system();
    repo.set_password(existing.id, "new-secret", &ctx).await?;
    repo.set_image(existing.id, 7, &ctx).await?;

    let stored = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "new-secret");
    assert_eq!(stored.image_id, Some(7));

    Ok(())
}
