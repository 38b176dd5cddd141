use super::*;

/// Tests fetching a missing record.
///
/// Expected: "Record not found" failure rather than an error
#[tokio::test]
async fn get_missing_record_is_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let res = controller(db).get(7, &ActorContext::anonymous()).await;

    assert!(!res.success);
    assert_eq!(res.messages, vec![RECORD_NOT_FOUND.to_string()]);

    Ok(())
}

/// Tests deleting an existing record.
///
/// Expected: success with the removed record as data
#[tokio::test]
async fn delete_returns_removed_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let physics = factory::course::CourseFactory::new(db)
        .name("Physics")
        .build()
        .await?;

    let res = controller(db)
        .delete(physics.id, &ActorContext::anonymous())
        .await;

    assert!(res.success);
    assert_eq!(res.data.unwrap()["name"], json!("Physics"));
    assert_eq!(course_count(db).await?, 0);

    Ok(())
}

/// Tests deleting a missing record.
///
/// Expected: failure carrying the not-found message
#[tokio::test]
async fn delete_missing_record_is_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let res = controller(db).delete(3, &ActorContext::anonymous()).await;

    assert!(!res.success);
    assert_eq!(res.messages, vec!["Record not found with id 3".to_string()]);

    Ok(())
}

/// Tests deleting several records.
///
/// Expected: success message and the refreshed page as data
#[tokio::test]
async fn delete_many_returns_refreshed_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let ids = seed_courses(db, 4).await?;

    let res = controller(db)
        .delete_many(
            &[ids[0].to_string(), ids[1].to_string()],
            0,
            &CourseForm::default(),
            &ActorContext::anonymous(),
        )
        .await;

    assert!(res.success);
    assert_eq!(res.messages, vec![RECORDS_DELETED.to_string()]);
    assert_eq!(data_len(&res.data), 2);

    Ok(())
}

/// Tests a batch whose second id does not exist.
///
/// Expected: failure with the not-found message; the first deletion stands
#[tokio::test]
async fn delete_many_aborts_on_first_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let ids = seed_courses(db, 1).await?;
    let missing = ids[0] + 1;

    let res = controller(db)
        .delete_many(
            &[ids[0].to_string(), missing.to_string(), "garbage".to_string()],
            0,
            &CourseForm::default(),
            &ActorContext::anonymous(),
        )
        .await;

    assert!(!res.success);
    assert_eq!(
        res.messages,
        vec![format!("Record not found with id {}", missing)]
    );
    assert!(res.data.is_none());
    assert_eq!(course_count(db).await?, 0);

    Ok(())
}

/// Tests a batch containing an id that is not a number.
///
/// Expected: failure before anything is deleted
#[tokio::test]
async fn delete_many_rejects_unparsable_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let ids = seed_courses(db, 1).await?;

    let res = controller(db)
        .delete_many(
            &["abc".to_string(), ids[0].to_string()],
            0,
            &CourseForm::default(),
            &ActorContext::anonymous(),
        )
        .await;

    assert!(!res.success);
    assert_eq!(course_count(db).await?, 1);

    Ok(())
}
