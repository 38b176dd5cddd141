use crate::{
    model::{
        api::{BaseForm, InputErrors},
        course::{CourseDto, CourseForm},
    },
    server::{
        model::record::{EntityForm, Record},
        util::validate::Validator,
    },
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Course {
    pub id: Option<i32>,
    pub name: String,
    pub duration: String,
    pub description: String,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            duration: entity.duration,
            description: entity.description,
        }
    }
}

impl Record for Course {
    type Dto = CourseDto;

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
        "Course"
    }

    fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            duration: self.duration,
            description: self.description,
        }
    }
}

impl EntityForm for CourseForm {
    type Record = Course;

    fn base_mut(&mut self) -> &mut BaseForm {
        &mut self.base
    }

    fn validate(&self) -> InputErrors {
        Validator::new()
            .required("name", &self.name)
            .max_len("name", &self.name, 50)
            .required("duration", &self.duration)
            .required("description", &self.description)
            .finish()
    }

    fn to_record(&self) -> Course {
        Course {
            id: self.base.id,
            name: self.name.trim().to_string(),
            duration: self.duration.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}
