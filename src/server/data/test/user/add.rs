use super::*;

/// Tests inserting a new account.
///
/// Verifies that the generated id is returned, the email defaults to the login id,
/// the default member role is applied and audit columns carry the caller.
///
/// Expected: Ok with the stored row matching the record
#[tokio::test]
async fn inserts_account_with_audit_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let ctx = ActorContext::system();
    let id = repo.add(&new_user("a@x.com"), &ctx).await?;

    let stored = entity::prelude::User::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.login_id, "a@x.com");
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(stored.role_id, 2);
    assert_eq!(stored.failed_login_attempts, 0);
    assert_eq!(stored.created_by, "system");
    assert_eq!(stored.modified_by, "system");

    Ok(())
}

/// Tests that the storage layer rejects a duplicate login id.
///
/// Verifies the unique index backs up the application level duplicate check.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_login_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_credentials(db, "dup@x.com", "p1").await?;

    let repo = UserRepository::new(db);
    let err = repo
        .add(&new_user("dup@x.com"), &ActorContext::system())
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
