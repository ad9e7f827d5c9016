use async_trait::async_trait;
use coursegate_core::{AppResult, ResourceId};
use coursegate_domain::{Course, Lesson};

/// Record store port for course records.
///
/// The store applies no authorization of its own; callers must pass the
/// permission policy before invoking any mutation.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Lists every course record in stored order.
    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    /// Finds a course by canonical identifier.
    async fn find_course(&self, course_id: &ResourceId) -> AppResult<Option<Course>>;

    /// Persists a new course record.
    async fn create_course(&self, course: Course) -> AppResult<Course>;

    /// Replaces an existing course record.
    async fn update_course(&self, course: Course) -> AppResult<Course>;
}

/// Record store port for lesson records.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Lists the lessons of one course in stored order.
    async fn list_lessons_for_course(&self, course_id: &ResourceId) -> AppResult<Vec<Lesson>>;

    /// Finds a lesson by canonical identifier.
    async fn find_lesson(&self, lesson_id: &ResourceId) -> AppResult<Option<Lesson>>;

    /// Persists a new lesson record.
    async fn create_lesson(&self, lesson: Lesson) -> AppResult<Lesson>;

    /// Replaces an existing lesson record.
    async fn update_lesson(&self, lesson: Lesson) -> AppResult<Lesson>;

    /// Deletes a lesson record.
    async fn delete_lesson(&self, lesson_id: &ResourceId) -> AppResult<()>;
}

/// Port supplying an already-chosen candidate instructor identifier.
///
/// How the candidate is obtained (for example an external random-identity
/// generator) is this collaborator's concern; roster uniqueness is not.
#[async_trait]
pub trait CandidateInstructorSource: Send + Sync {
    /// Returns the next candidate instructor identifier.
    async fn next_candidate(&self) -> AppResult<ResourceId>;
}

/// Classification of a user-facing operation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation completed.
    Success,
    /// Operation declined without mutating anything.
    Warning,
    /// Operation failed.
    Error,
}

/// Classified outcome emitted to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Outcome classification.
    pub kind: NoticeKind,
    /// Human-readable message for the collaborator to render.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Creates a warning notice.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Port rendering classified outcomes to the user.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Publishes one notice.
    async fn publish(&self, notice: Notice) -> AppResult<()>;
}

/// Abstract screen transition requested by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Leave the current screen for the access-denied state.
    AccessDenied,
    /// Return to the dashboard.
    Dashboard,
    /// Return to a course detail screen.
    CourseDetail(ResourceId),
}

/// Port performing the actual screen transition.
#[async_trait]
pub trait NavigationSink: Send + Sync {
    /// Carries out one navigation intent.
    async fn navigate(&self, intent: NavigationIntent) -> AppResult<()>;
}
