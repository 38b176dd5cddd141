/// Uploaded file stored alongside the record that owns it.
///
/// `id` set to a persisted id replaces that attachment in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attachment {
    pub id: Option<i32>,
    pub name: String,
    pub content_type: String,
    pub description: String,
    pub path: String,
    pub user_id: i32,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn from_entity(entity: entity::attachment::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            content_type: entity.content_type,
            description: entity.description,
            path: entity.path,
            user_id: entity.user_id,
            data: entity.data,
        }
    }
}
