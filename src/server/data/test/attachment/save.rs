use super::*;

fn picture(data: &[u8]) -> Attachment {
    Attachment {
        id: None,
        name: "me.png".to_string(),
        content_type: "image/png".to_string(),
        description: "Profile picture".to_string(),
        path: "/api/auth/profilePic/1".to_string(),
        user_id: 1,
        data: data.to_vec(),
    }
}

/// Tests inserting a new attachment.
///
/// Expected: Ok with a generated id and the bytes stored
#[tokio::test]
async fn inserts_new_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Attachment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttachmentRepository::new(db);
    let id = repo.save(&picture(b"abc"), &ActorContext::system()).await?;

    let stored = repo.find_by_id(id).await?.unwrap();
    assert_eq!(stored.data, b"abc".to_vec());

    Ok(())
}

/// Tests that saving with a persisted id replaces the attachment in place.
///
/// Expected: Ok with the same id and the new bytes
#[tokio::test]
async fn replaces_existing_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Attachment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttachmentRepository::new(db);
    let ctx = ActorContext::system();
    let id = repo.save(&picture(b"old"), &ctx).await?;

    let mut replacement = picture(b"new");
    replacement.id = Some(id);
    let saved_id = repo.save(&replacement, &ctx).await?;

    assert_eq!(saved_id, id);
    assert_eq!(repo.find_by_id(id).await?.unwrap().data, b"new".to_vec());

    Ok(())
}
