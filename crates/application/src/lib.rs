//! Application services and ports.

#![forbid(unsafe_code)]

mod course_ports;
mod course_service;
mod lesson_service;

pub use course_ports::{
    CandidateInstructorSource, CourseRepository, LessonRepository, NavigationIntent,
    NavigationSink, Notice, NoticeKind, NotificationSink,
};
pub use course_service::{CourseDetail, CourseDraft, CourseService};
pub use lesson_service::{LessonDraft, LessonService};
