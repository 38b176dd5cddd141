use sea_orm::DatabaseConnection;

use crate::{
    model::course::CourseForm,
    server::{controller::crud::Resource, data::course::CourseRepository},
};

/// Path the course routes are nested under.
pub const COURSE_PATH: &str = "/api/course";

pub struct CourseResource;

impl Resource for CourseResource {
    type Form = CourseForm;
    type Repo = CourseRepository;

    fn repository(db: &DatabaseConnection) -> CourseRepository {
        CourseRepository::new(db)
    }
}
