use super::*;

/// Tests that each failure increments the counter by one.
///
/// Expected: Ok with counter at 2 after two failures
#[tokio::test]
async fn increments_failed_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.record_login_failure(user.id).await?;
    repo.record_login_failure(user.id).await?;

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.failed_login_attempts, 2);

    Ok(())
}

/// Tests that a success resets the counter and stamps the login time.
///
/// Expected: Ok with counter at 0 and last_login set
#[tokio::test]
async fn success_resets_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .failed_login_attempts(3)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.record_login_success(user.id, Utc::now()).await?;

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.last_login.is_some());

    Ok(())
}

/// Tests bookkeeping against an id that does not exist.
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
    let result = repo.record_login_failure(5).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
