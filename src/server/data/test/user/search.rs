use super::*;

/// Tests that an empty filter pages through every account in id order.
///
/// Expected: Ok with pages of the requested size and a short last page
#[tokio::test]
async fn pages_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::user::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);
    let ctx = ActorContext::anonymous();
    let filter = User::default();

    let first = repo.search(&filter, 0, 2, &ctx).await?;
    let last = repo.search(&filter, 2, 2, &ctx).await?;

    assert_eq!(
        first.iter().map(|u| u.id.unwrap()).collect::<Vec<_>>(),
        ids[0..2].to_vec()
    );
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].id, Some(ids[4]));

    Ok(())
}

/// Tests that repeated searches with the same input return the same records.
///
/// Expected: Ok with identical results
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let ctx = ActorContext::anonymous();
    let filter = User::default();

    let a = repo.search(&filter, 1, 3, &ctx).await?;
    let b = repo.search(&filter, 1, 3, &ctx).await?;

    assert_eq!(a, b);

    Ok(())
}

/// Tests prefix matching on text fields and equality on status.
///
/// Expected: Ok with only the matching account
#[tokio::test]
async fn filters_by_prefix_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Ada", "Lovelace")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Adam", "Smith")
        .status("Inactive")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Grace", "Hopper")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let ctx = ActorContext::anonymous();

    let prefix = User {
        first_name: "Ad".to_string(),
        ..Default::default()
    };
    assert_eq!(repo.search(&prefix, 0, 10, &ctx).await?.len(), 2);

    let active = User {
        first_name: "Ad".to_string(),
        status: "Active".to_string(),
        ..Default::default()
    };
    let result = repo.search(&active, 0, 10, &ctx).await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].first_name, "Ada");

    Ok(())
}
