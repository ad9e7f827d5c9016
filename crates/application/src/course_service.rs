use std::sync::Arc;

use chrono::NaiveDate;
use coursegate_core::{AppError, AppResult, ResourceId, UserIdentity};
use coursegate_domain::{Course, CourseAction, CourseInput, CourseRoles, Lesson};
use uuid::Uuid;

use crate::course_ports::{
    CourseRepository, LessonRepository, NavigationIntent, NavigationSink, Notice, NotificationSink,
};

/// Input payload for course create/update screens.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    /// Course display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// First day of the course.
    pub start_date: NaiveDate,
    /// Last day of the course.
    pub end_date: NaiveDate,
}

/// Everything the course detail screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetail {
    /// The course record.
    pub course: Course,
    /// Role set of the viewing user, used to gate controls.
    pub roles: CourseRoles,
    /// Lessons of the course in stored order, ready for projection.
    pub lessons: Vec<Lesson>,
}

/// Application service for course screens and roster mutations.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    lessons: Arc<dyn LessonRepository>,
    notifications: Arc<dyn NotificationSink>,
    navigation: Arc<dyn NavigationSink>,
}

impl CourseService {
    /// Creates a new course service from port implementations.
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

    /// Lists the courses the actor participates in, as creator or
    /// instructor, for the dashboard.
    pub async fn my_courses(&self, actor: &UserIdentity) -> AppResult<Vec<Course>> {
        let courses = self.courses.list_courses().await?;

        Ok(courses
            .into_iter()
            .filter(|course| {
                let roles = CourseRoles::resolve(actor, course);
                roles.is_creator() || roles.is_instructor()
            })
            .collect())
    }

    /// Creates a course with the actor as creator and an empty roster.
    pub async fn create_course(
        &self,
        actor: &UserIdentity,
        draft: CourseDraft,
    ) -> AppResult<Course> {
        let course = Course::new(CourseInput {
            id: ResourceId::from(Uuid::new_v4().to_string()),
            name: draft.name,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            creator_id: actor.id().clone(),
            instructors: Vec::new(),
        })?;

        let created = self.courses.create_course(course).await?;
        self.notifications
            .publish(Notice::success(format!("course '{}' created", created.name())))
            .await?;

        Ok(created)
    }

    /// Updates course metadata. Creator only; the roster and creator are
    /// carried over unchanged.
    pub async fn update_course(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        draft: CourseDraft,
    ) -> AppResult<Course> {
        let course = self.require_course(course_id).await?;
        let roles = CourseRoles::resolve(actor, &course);
        require_action(&roles, CourseAction::EditMetadata, actor, course_id)?;

        // Metadata-only validation: the stored roster is carried over
        // verbatim even when it is corrupted, so the creator can always
        // edit their own course.
        let updated = course.with_metadata(
            draft.name,
            draft.description,
            draft.start_date,
            draft.end_date,
        )?;

        let saved = self.courses.update_course(updated).await?;
        self.notifications
            .publish(Notice::success(format!("course '{}' updated", saved.name())))
            .await?;

        Ok(saved)
    }

    /// Loads the course detail screen.
    ///
    /// Denial here is terminal for the screen: a missing course or a
    /// failed role check pushes an access-denied navigation intent and
    /// returns the error.
    pub async fn course_detail(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
    ) -> AppResult<CourseDetail> {
        let course = match self.require_course(course_id).await {
            Ok(course) => course,
            Err(error) => {
                if error.is_screen_fatal() {
                    self.navigation
                        .navigate(NavigationIntent::AccessDenied)
                        .await?;
                }
                return Err(error);
            }
        };

        let roles = CourseRoles::resolve(actor, &course);
        if !roles.allows(CourseAction::ViewDetail) {
            self.navigation
                .navigate(NavigationIntent::AccessDenied)
                .await?;
            return Err(AppError::AccessDenied(format!(
                "user '{}' holds no role on course '{course_id}'",
                actor.id()
            )));
        }

        let lessons = self.lessons.list_lessons_for_course(course_id).await?;

        Ok(CourseDetail {
            course,
            roles,
            lessons,
        })
    }

    /// Adds an already-chosen candidate to the instructor roster.
    ///
    /// Creator only. A canonical duplicate is declined with a warning
    /// notice and no mutation.
    pub async fn add_instructor(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        candidate: ResourceId,
    ) -> AppResult<Course> {
        let course = self.require_course(course_id).await?;
        let roles = CourseRoles::resolve(actor, &course);
        require_action(&roles, CourseAction::ManageRoster, actor, course_id)?;

        let updated = match course.with_instructor(candidate.clone()) {
            Ok(updated) => updated,
            Err(error) => {
                if matches!(error, AppError::DuplicateInstructor(_)) {
                    self.notifications
                        .publish(Notice::warning(format!(
                            "instructor '{candidate}' is already on the roster"
                        )))
                        .await?;
                }
                return Err(error);
            }
        };

        let saved = self.courses.update_course(updated).await?;
        self.notifications
            .publish(Notice::success(format!("instructor '{candidate}' added")))
            .await?;

        Ok(saved)
    }

    /// Removes an instructor from the roster.
    ///
    /// Creator only; the caller has already confirmed intent. Removing a
    /// non-member is a no-op, not a fault: no write is issued and no
    /// notice is published.
    pub async fn remove_instructor(
        &self,
        actor: &UserIdentity,
        course_id: &ResourceId,
        instructor_id: &ResourceId,
    ) -> AppResult<Course> {
        let course = self.require_course(course_id).await?;
        let roles = CourseRoles::resolve(actor, &course);
        require_action(&roles, CourseAction::ManageRoster, actor, course_id)?;

        let updated = course.without_instructor(instructor_id);
        if updated.instructors().len() == course.instructors().len() {
            // Nothing was removed; skip the write and stay quiet rather
            // than report a removal that never happened.
            return Ok(updated);
        }

        let saved = self.courses.update_course(updated).await?;
        self.notifications
            .publish(Notice::success(format!(
                "instructor '{instructor_id}' removed"
            )))
            .await?;

        Ok(saved)
    }

    async fn require_course(&self, course_id: &ResourceId) -> AppResult<Course> {
        self.courses
            .find_course(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("course '{course_id}' does not exist")))
    }
}

pub(crate) fn require_action(
    roles: &CourseRoles,
    action: CourseAction,
    actor: &UserIdentity,
    course_id: &ResourceId,
) -> AppResult<()> {
    if roles.allows(action) {
        return Ok(());
    }

    Err(AppError::AccessDenied(format!(
        "user '{}' is not allowed '{}' on course '{course_id}'",
        actor.id(),
        action.as_str()
    )))
}
