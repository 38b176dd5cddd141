use super::*;

/// Tests filtering roles by status.
///
/// Expected: Ok with only roles holding the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::RoleFactory::new(db).name("Admin").build().await?;
    factory::role::RoleFactory::new(db)
        .name("Auditor")
        .status("Inactive")
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    let filter = Role {
        status: "Inactive".to_string(),
        ..Default::default()
    };
    let result = repo
        .search(&filter, 0, 10, &ActorContext::anonymous())
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Auditor");

    Ok(())
}

/// Tests looking a role up by its name.
///
/// Expected: Ok(Some) for the stored name
#[tokio::test]
async fn finds_by_name_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::role::RoleFactory::new(db).name("Admin").build().await?;

    let repo = RoleRepository::new(db);
    let found = repo
        .find_by_unique_key("name", "Admin", &ActorContext::anonymous())
        .await?;

    assert_eq!(found.and_then(|r| r.id), Some(role.id));

    Ok(())
}
