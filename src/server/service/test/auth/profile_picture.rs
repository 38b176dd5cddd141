use super::*;

fn picture(bytes: &[u8]) -> Attachment {
    Attachment {
        name: "me.png".to_string(),
        content_type: "image/png".to_string(),
        description: "Profile picture".to_string(),
        path: "/api/auth/profilePic".to_string(),
        data: bytes.to_vec(),
        ..Default::default()
    }
}

/// Tests uploading and then replacing a profile picture.
///
/// Expected: the second upload reuses the same attachment id and the account
/// points at it
#[tokio::test]
async fn upload_then_replace() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = AuthFixture::new();
    let ctx = ActorContext::system();

    let account = factory::user::create_user(db).await?;
    let service = fixture.service(db);

    let first = service
        .upload_profile_picture(account.id, picture(b"one"), &ctx)
        .await?
        .unwrap();
    let second = service
        .upload_profile_picture(account.id, picture(b"two"), &ctx)
        .await?
        .unwrap();

    assert_eq!(first, second);
    let stored = entity::prelude::User::find_by_id(account.id).one(db).await?.unwrap();
    assert_eq!(stored.image_id, Some(second));

    let current = service.profile_picture(account.id, &ctx).await?.unwrap();
    assert_eq!(current.data, b"two".to_vec());
    assert_eq!(current.user_id, account.id);

    Ok(())
}

/// Tests a stale image reference on the account.
///
/// Expected: a new attachment is created and the account re-pointed
#[tokio::test]
async fn stale_image_reference_is_replaced() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = AuthFixture::new();
    let ctx = ActorContext::system();

    let account = factory::user::UserFactory::new(db).image_id(42).build().await?;

    let image_id = fixture
        .service(db)
        .upload_profile_picture(account.id, picture(b"one"), &ctx)
        .await?
        .unwrap();

    assert_ne!(image_id, 42);
    let stored = entity::prelude::User::find_by_id(account.id).one(db).await?.unwrap();
    assert_eq!(stored.image_id, Some(image_id));

    Ok(())
}

/// Tests uploading for an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_account_is_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = AuthFixture::new();

    let result = fixture
        .service(db)
        .upload_profile_picture(404, picture(b"one"), &ActorContext::system())
        .await?;

    assert!(result.is_none());

    Ok(())
}
