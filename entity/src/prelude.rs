pub use super::attachment::Entity as Attachment;
pub use super::course::Entity as Course;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
