use crate::{
    model::{
        api::{BaseForm, InputErrors},
        role::{RoleDto, RoleForm},
    },
    server::{
        model::record::{EntityForm, Record},
        util::validate::Validator,
    },
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Role {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub status: String,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            description: entity.description,
            status: entity.status,
        }
    }
}

impl Record for Role {
    type Dto = RoleDto;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn unique_key() -> &'static str {
        "name"
    }

    fn unique_value(&self) -> String {
        self.name.clone()
    }

    fn label() -> &'static str {
        "Role"
    }

    fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
        }
    }
}

impl EntityForm for RoleForm {
    type Record = Role;

    fn base_mut(&mut self) -> &mut BaseForm {
        &mut self.base
    }

    fn validate(&self) -> InputErrors {
        Validator::new()
            .required("name", &self.name)
            .max_len("name", &self.name, 50)
            .required("description", &self.description)
            .finish()
    }

    fn to_record(&self) -> Role {
        Role {
            id: self.base.id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self
                .status
                .clone()
                .unwrap_or_else(|| super::user::STATUS_ACTIVE.to_string()),
        }
    }

    fn to_filter(&self) -> Role {
        Role {
            id: None,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status.clone().unwrap_or_default(),
        }
    }
}
