use std::sync::Arc;

use chrono::NaiveDate;
use coursegate_core::{AppError, AppResult, ResourceId, UserIdentity};
use coursegate_domain::{
    Course, CourseAction, CourseRoles, Lesson, LessonAccess, LessonInput, LessonStatus,
};
use uuid::Uuid;

use crate::course_ports::{
    CourseRepository, LessonRepository, NavigationIntent, NavigationSink, Notice, NotificationSink,
};
use crate::course_service::require_action;

/// Input payload for lesson create/update screens.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonDraft {
    /// Lesson title.
    pub title: String,
    /// Publication status.
    pub status: LessonStatus,
    /// Date the lesson goes live.
    pub publish_date: NaiveDate,
    /// Video URL for the lesson content.
    pub video_url: String,
}

/// Application service for lesson mutations and the lesson form screen.
#[derive(Clone)]
pub struct LessonService {
    courses: Arc<dyn CourseRepository>,
    lessons: Arc<dyn LessonRepository>,
    notifications: Arc<dyn NotificationSink>,
    navigation: Arc<dyn NavigationSink>,
}

impl LessonService {
    /// Creates a new lesson service from port implementations.
    #[must_use]
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        lessons: Arc<dyn LessonRepository>,
        notifications: Arc<dyn NotificationSink>,
        navigation: Arc<dyn NavigationSink>,
    ) -> Self {
        Self {
            courses,
            lessons,
            notifications,
            navigation,
        }
    }

    /// Creates a lesson in a course. Open to the course creator and its
    /// instructors; the actor becomes the lesson author.
    pub async fn create_lesson(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        draft: LessonDraft,
    ) -> AppResult<Lesson> {
        let course = self.require_course(course_id).await?;
        let roles = CourseRoles::resolve(actor, &course);
        require_action(&roles, CourseAction::CreateLesson, actor, course_id)?;

        let lesson = Lesson::new(LessonInput {
            id: ResourceId::from(Uuid::new_v4().to_string()),
            course_id: course.id().clone(),
            title: draft.title,
            status: draft.status,
            publish_date: draft.publish_date,
            video_url: draft.video_url,
            creator_id: actor.id().clone(),
        })?;

        let created = self.lessons.create_lesson(lesson).await?;
        self.notifications
            .publish(Notice::success(format!("lesson '{}' created", created.title())))
            .await?;

        Ok(created)
    }

    /// Loads a lesson for its edit screen, navigating away on denial.
    ///
    /// No role on the course sends the user back to the dashboard; a
    /// role without edit rights on this particular lesson sends the user
    /// back to the course detail screen.
    pub async fn open_lesson_editor(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        lesson_id: &ResourceId,
    ) -> AppResult<Lesson> {
        let course = self.require_course(course_id).await?;
        let roles = CourseRoles::resolve(actor, &course);

        if !roles.allows(CourseAction::ViewDetail) {
            self.notifications
                .publish(Notice::error("you do not have access to this course"))
                .await?;
            self.navigation.navigate(NavigationIntent::Dashboard).await?;
            return Err(AppError::AccessDenied(format!(
                "user '{}' holds no role on course '{course_id}'",
                actor.id()
            )));
        }

        let lesson = self.require_lesson(course_id, lesson_id).await?;
        let access = LessonAccess::resolve(actor, &lesson, &roles);
        if !access.can_edit() {
            self.notifications
                .publish(Notice::error("you cannot edit this lesson"))
                .await?;
            self.navigation
                .navigate(NavigationIntent::CourseDetail(course_id.clone()))
                .await?;
            return Err(AppError::AccessDenied(format!(
                "user '{}' may not edit lesson '{lesson_id}'",
                actor.id()
            )));
        }

        Ok(lesson)
    }

    /// Updates a lesson. Only its author or the course creator may do
    /// so; authorship is preserved across updates.
    pub async fn update_lesson(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        lesson_id: &ResourceId,
        draft: LessonDraft,
    ) -> AppResult<Lesson> {
        let (course, lesson) = self.require_editable(actor, course_id, lesson_id).await?;

        let updated = Lesson::new(LessonInput {
            id: lesson.id().clone(),
            course_id: course.id().clone(),
            title: draft.title,
            status: draft.status,
            publish_date: draft.publish_date,
            video_url: draft.video_url,
            creator_id: lesson.creator_id().clone(),
        })?;

        let saved = self.lessons.update_lesson(updated).await?;
        self.notifications
            .publish(Notice::success(format!("lesson '{}' updated", saved.title())))
            .await?;

        Ok(saved)
    }

    /// Deletes a lesson. Only its author or the course creator may do
    /// so; the caller has already confirmed intent.
    pub async fn delete_lesson(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        lesson_id: &ResourceId,
    ) -> AppResult<()> {
        let (_, lesson) = self.require_editable(actor, course_id, lesson_id).await?;

        self.lessons.delete_lesson(lesson.id()).await?;
        self.notifications
            .publish(Notice::success(format!("lesson '{}' deleted", lesson.title())))
            .await?;

        Ok(())
    }

    async fn require_editable(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        lesson_id: &ResourceId,
    ) -> AppResult<(Course, Lesson)> {
        let course = self.require_course(course_id).await?;
        let roles = CourseRoles::resolve(actor, &course);
        require_action(&roles, CourseAction::ViewDetail, actor, course_id)?;

        let lesson = self.require_lesson(course_id, lesson_id).await?;
        let access = LessonAccess::resolve(actor, &lesson, &roles);
        if !access.can_edit() {
            return Err(AppError::AccessDenied(format!(
                "user '{}' may not edit lesson '{lesson_id}'",
                actor.id()
            )));
        }

        Ok((course, lesson))
    }

    async fn require_course(&self, course_id: &ResourceId) -> AppResult<Course> {
        self.courses
            .find_course(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("course '{course_id}' does not exist")))
    }

    async fn require_lesson(
        &self,
        course_id: &ResourceId,
        lesson_id: &ResourceId,
    ) -> AppResult<Lesson> {
        let lesson = self
            .lessons
            .find_lesson(lesson_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("lesson '{lesson_id}' does not exist")))?;

        if lesson.course_id() != course_id {
            return Err(AppError::NotFound(format!(
                "lesson '{lesson_id}' does not belong to course '{course_id}'"
            )));
        }

        Ok(lesson)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use coursegate_core::{AppError, AppResult, ResourceId, UserIdentity};
    use coursegate_domain::{Course, CourseInput, Lesson, LessonInput, LessonStatus};
    use tokio::sync::Mutex;

    use crate::course_ports::{
        CourseRepository, LessonRepository, NavigationIntent, NavigationSink, Notice,
        NotificationSink,
    };

    use super::{LessonDraft, LessonService};

    #[derive(Default)]
    struct FakeCourseRepository {
        courses: Mutex<Vec<Course>>,
    }

    #[async_trait]
    impl CourseRepository for FakeCourseRepository {
        async fn list_courses(&self) -> AppResult<Vec<Course>> {
            Ok(self.courses.lock().await.clone())
        }

        async fn find_course(&self, course_id: &ResourceId) -> AppResult<Option<Course>> {
            Ok(self
                .courses
                .lock()
                .await
                .iter()
                .find(|course| course.id() == course_id)
                .cloned())
        }

        async fn create_course(&self, course: Course) -> AppResult<Course> {
            self.courses.lock().await.push(course.clone());
            Ok(course)
        }

        async fn update_course(&self, course: Course) -> AppResult<Course> {
            Ok(course)
        }
    }

    #[derive(Default)]
    struct FakeLessonRepository {
        lessons: Mutex<Vec<Lesson>>,
    }

    #[async_trait]
    impl LessonRepository for FakeLessonRepository {
        async fn list_lessons_for_course(
            &self,
            course_id: &ResourceId,
        ) -> AppResult<Vec<Lesson>> {
            Ok(self
                .lessons
                .lock()
                .await
                .iter()
                .filter(|lesson| lesson.course_id() == course_id)
                .cloned()
                .collect())
        }

        async fn find_lesson(&self, lesson_id: &ResourceId) -> AppResult<Option<Lesson>> {
            Ok(self
                .lessons
                .lock()
                .await
                .iter()
                .find(|lesson| lesson.id() == lesson_id)
                .cloned())
        }

        async fn create_lesson(&self, lesson: Lesson) -> AppResult<Lesson> {
            self.lessons.lock().await.push(lesson.clone());
            Ok(lesson)
        }

        async fn update_lesson(&self, lesson: Lesson) -> AppResult<Lesson> {
            let mut lessons = self.lessons.lock().await;
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
            let mut lessons = self.lessons.lock().await;
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

    #[derive(Default)]
    struct RecordingNotificationSink {
        notices: Mutex<Vec<Notice>>,
    }

    #[async_trait]
    impl NotificationSink for RecordingNotificationSink {
        async fn publish(&self, notice: Notice) -> AppResult<()> {
            self.notices.lock().await.push(notice);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigationSink {
        intents: Mutex<Vec<NavigationIntent>>,
    }

    #[async_trait]
    impl NavigationSink for RecordingNavigationSink {
        async fn navigate(&self, intent: NavigationIntent) -> AppResult<()> {
            self.intents.lock().await.push(intent);
            Ok(())
        }
    }

    struct Harness {
        service: LessonService,
        lessons: Arc<FakeLessonRepository>,
        navigation: Arc<RecordingNavigationSink>,
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, day).unwrap_or_default()
    }

    async fn harness() -> Harness {
        let courses = Arc::new(FakeCourseRepository::default());
        let lessons = Arc::new(FakeLessonRepository::default());
        let notifications = Arc::new(RecordingNotificationSink::default());
        let navigation = Arc::new(RecordingNavigationSink::default());

        // Course created by user 1 with instructors 7 and 9; lesson
        // authored by instructor 7.
        let course = Course::new(CourseInput {
            id: ResourceId::from("c-1"),
            name: "Rust Fundamentals".to_owned(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap_or_default(),
            creator_id: ResourceId::from(1),
            instructors: vec![ResourceId::from(7), ResourceId::from(9)],
        })
        .unwrap_or_else(|_| unreachable!());
        courses.courses.lock().await.push(course);

        let lesson = Lesson::new(LessonInput {
            id: ResourceId::from("l-1"),
            course_id: ResourceId::from("c-1"),
            title: "Ownership".to_owned(),
            status: LessonStatus::Draft,
            publish_date: date(1),
            video_url: "https://videos.example.com/ownership".to_owned(),
            creator_id: ResourceId::from(7),
        })
        .unwrap_or_else(|_| unreachable!());
        lessons.lessons.lock().await.push(lesson);

        let service = LessonService::new(
            courses.clone(),
            lessons.clone(),
            notifications.clone(),
            navigation.clone(),
        );

        Harness {
            service,
            lessons,
            navigation,
        }
    }

    fn draft(title: &str) -> LessonDraft {
        LessonDraft {
            title: title.to_owned(),
            status: LessonStatus::Published,
            publish_date: date(10),
            video_url: "https://videos.example.com/updated".to_owned(),
        }
    }

    #[tokio::test]
    async fn instructor_creates_lesson_as_author() {
        let harness = harness().await;
        let created = harness
            .service
            .create_lesson(
                &UserIdentity::new(9, "Davi"),
                &ResourceId::from("c-1"),
                draft("Borrowing"),
            )
            .await;
        assert!(created.is_ok());
        assert_eq!(
            created.unwrap_or_else(|_| unreachable!()).creator_id(),
            &ResourceId::from(9)
        );
    }

    #[tokio::test]
    async fn outsider_cannot_create_lessons() {
        let harness = harness().await;
        let result = harness
            .service
            .create_lesson(
                &UserIdentity::new(4, "Eva"),
                &ResourceId::from("c-1"),
                draft("Borrowing"),
            )
            .await;
        assert!(matches!(result, Err(AppError::AccessDenied(_))));
    }

    #[tokio::test]
    async fn author_updates_own_lesson() {
        let harness = harness().await;
        let updated = harness
            .service
            .update_lesson(
                &UserIdentity::new(7, "Carla"),
                &ResourceId::from("c-1"),
                &ResourceId::from("l-1"),
                draft("Ownership revisited"),
            )
            .await;
        assert!(updated.is_ok());
        assert_eq!(
            updated.unwrap_or_else(|_| unreachable!()).title(),
            "Ownership revisited"
        );
    }

    #[tokio::test]
    async fn non_author_instructor_cannot_update() {
        let harness = harness().await;
        let result = harness
            .service
            .update_lesson(
                &UserIdentity::new(9, "Davi"),
                &ResourceId::from("c-1"),
                &ResourceId::from("l-1"),
                draft("Hijacked"),
            )
            .await;
        assert!(matches!(result, Err(AppError::AccessDenied(_))));
    }

    #[tokio::test]
    async fn course_creator_update_preserves_authorship() {
        let harness = harness().await;
        let updated = harness
            .service
            .update_lesson(
                &UserIdentity::new(1, "Ana"),
                &ResourceId::from("c-1"),
                &ResourceId::from("l-1"),
                draft("Ownership, annotated"),
            )
            .await;
        assert!(updated.is_ok());
        assert_eq!(
            updated.unwrap_or_else(|_| unreachable!()).creator_id(),
            &ResourceId::from(7)
        );
    }

    #[tokio::test]
    async fn author_deletes_own_lesson() {
        let harness = harness().await;
        let deleted = harness
            .service
            .delete_lesson(
                &UserIdentity::new(7, "Carla"),
                &ResourceId::from("c-1"),
                &ResourceId::from("l-1"),
            )
            .await;
        assert!(deleted.is_ok());
        assert!(harness.lessons.lessons.lock().await.is_empty());
    }

    #[tokio::test]
    async fn editor_gate_sends_outsiders_to_the_dashboard() {
        let harness = harness().await;
        let result = harness
            .service
            .open_lesson_editor(
                &UserIdentity::new(4, "Eva"),
                &ResourceId::from("c-1"),
                &ResourceId::from("l-1"),
            )
            .await;
        assert!(matches!(result, Err(AppError::AccessDenied(_))));

        let intents = harness.navigation.intents.lock().await;
        assert_eq!(intents.as_slice(), &[NavigationIntent::Dashboard]);
    }

    #[tokio::test]
    async fn editor_gate_sends_non_authors_back_to_the_course() {
        let harness = harness().await;
        let result = harness
            .service
            .open_lesson_editor(
                &UserIdentity::new(9, "Davi"),
                &ResourceId::from("c-1"),
                &ResourceId::from("l-1"),
            )
            .await;
        assert!(matches!(result, Err(AppError::AccessDenied(_))));

        let intents = harness.navigation.intents.lock().await;
        assert_eq!(
            intents.as_slice(),
            &[NavigationIntent::CourseDetail(ResourceId::from("c-1"))]
        );
    }

    #[tokio::test]
    async fn lesson_from_another_course_is_not_found() {
        let harness = harness().await;
        let result = harness
            .service
            .update_lesson(
                &UserIdentity::new(1, "Ana"),
                &ResourceId::from("c-1"),
                &ResourceId::from("ghost"),
                draft("Ownership"),
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
