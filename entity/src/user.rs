use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub login_id: String,
    pub password: String,
    pub email: String,
    pub gender: Option<String>,
    pub dob: Option<Date>,
    pub phone: Option<String>,
    pub alternate_mobile: Option<String>,
    pub status: String,
    pub role_id: i32,
    pub image_id: Option<i32>,
    pub failed_login_attempts: i32,
    pub last_login: Option<DateTimeUtc>,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
