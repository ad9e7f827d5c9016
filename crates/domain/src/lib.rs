//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod course;
mod lesson;
mod policy;
mod projection;
mod roles;

pub use course::{Course, CourseInput};
pub use lesson::{Lesson, LessonInput, LessonStatus};
pub use policy::CourseAction;
pub use projection::{DEFAULT_PAGE_SIZE, LessonBrowser, LessonFilter, LessonPage, project};
pub use roles::{CourseRoles, LessonAccess};
