use sea_orm::DatabaseConnection;

use crate::{
    model::role::RoleForm,
    server::{controller::crud::Resource, data::role::RoleRepository},
};

/// Path the role routes are nested under.
pub const ROLE_PATH: &str = "/api/role";

pub struct RoleResource;

impl Resource for RoleResource {
    type Form = RoleForm;
    type Repo = RoleRepository;

    fn repository(db: &DatabaseConnection) -> RoleRepository {
        RoleRepository::new(db)
    }
}
