use super::*;

/// Tests deleting an existing account.
///
/// Expected: Ok with the removed record returned and the row gone
#[tokio::test]
async fn deletes_and_returns_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user_with_credentials(db, "a@x.com", "p1").await?;

    let repo = UserRepository::new(db);
    let removed = repo.delete(existing.id, &ActorContext::system()).await?;

    assert_eq!(removed.login_id, "a@x.com");
    assert!(entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
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
    let result = repo.delete(42, &ActorContext::system()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
