use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserForm,
    server::{controller::crud::Resource, data::user::UserRepository},
};

/// Path the user routes are nested under.
pub const USER_PATH: &str = "/api/user";

pub struct UserResource;

impl Resource for UserResource {
    type Form = UserForm;
    type Repo = UserRepository;

    fn repository(db: &DatabaseConnection) -> UserRepository {
        UserRepository::new(db)
    }
}
