use async_trait::async_trait;
use coursegate_application::{CourseRepository, LessonRepository};
use coursegate_core::{AppError, AppResult, ResourceId};
use coursegate_domain::{Course, Lesson};
use tokio::sync::RwLock;

/// In-memory record store for tests and local development.
///
/// Records keep their insertion order so listings stay stable across
/// repeated reads.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    courses: RwLock<Vec<Course>>,
    lessons: RwLock<Vec<Lesson>>,
}

impl InMemoryRecordStore {
    /// Creates an empty in-memory record store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(Vec::new()),
            lessons: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryRecordStore {
    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        Ok(self.courses.read().await.clone())
    }

    async fn find_course(&self, course_id: &ResourceId) -> AppResult<Option<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .find(|course| course.id() == course_id)
            .cloned())
    }

    async fn create_course(&self, course: Course) -> AppResult<Course> {
        let mut courses = self.courses.write().await;
        if courses.iter().any(|stored| stored.id() == course.id()) {
            return Err(AppError::Persistence(format!(
                "course '{}' already exists",
                course.id()
            )));
        }

        courses.push(course.clone());
        Ok(course)
    }

    async fn update_course(&self, course: Course) -> AppResult<Course> {
        let mut courses = self.courses.write().await;
        let position = courses
            .iter()
            .position(|stored| stored.id() == course.id())
            .ok_or_else(|| {
                AppError::NotFound(format!("course '{}' does not exist", course.id()))
            })?;

        courses[position] = course.clone();
        Ok(course)
    }
}

#[async_trait]
impl LessonRepository for InMemoryRecordStore {
    async fn list_lessons_for_course(&self, course_id: &ResourceId) -> AppResult<Vec<Lesson>> {
        Ok(self
            .lessons
            .read()
            .await
            .iter()
            .filter(|lesson| lesson.course_id() == course_id)
            .cloned()
            .collect())
    }

    async fn find_lesson(&self, lesson_id: &ResourceId) -> AppResult<Option<Lesson>> {
        Ok(self
            .lessons
            .read()
            .await
            .iter()
            .find(|lesson| lesson.id() == lesson_id)
            .cloned())
    }

    async fn create_lesson(&self, lesson: Lesson) -> AppResult<Lesson> {
        let mut lessons = self.lessons.write().await;
        if lessons.iter().any(|stored| stored.id() == lesson.id()) {
            return Err(AppError::Persistence(format!(
                "lesson '{}' already exists",
                lesson.id()
            )));
        }

        lessons.push(lesson.clone());
        Ok(lesson)
    }

    async fn update_lesson(&self, lesson: Lesson) -> AppResult<Lesson> {
        let mut lessons = self.lessons.write().await;
        let position = lessons
            .iter()
            .position(|stored| stored.id() == lesson.id())
            .ok_or_else(|| {
                AppError::NotFound(format!("lesson '{}' does not exist", lesson.id()))
            })?;

        lessons[position] = lesson.clone();
        Ok(lesson)
    }

    async fn delete_lesson(&self, lesson_id: &ResourceId) -> AppResult<()> {
        let mut lessons = self.lessons.write().await;
        let position = lessons
            .iter()
            .position(|stored| stored.id() == lesson_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("lesson '{lesson_id}' does not exist"))
            })?;

        lessons.remove(position);
        Ok(())
    }
}
