pub use super::lecture::Entity as Lecture;
pub use super::quiz::Entity as Quiz;
