use serde::{Deserialize, Serialize};

use crate::CourseRoles;

/// Course-scoped actions gated by the permission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseAction {
    /// Open the course detail screen.
    ViewDetail,
    /// Edit course name, description and dates.
    EditMetadata,
    /// Add or remove roster instructors.
    ManageRoster,
    /// Create a new lesson in the course.
    CreateLesson,
}

impl CourseAction {
    /// Returns a stable value for logs and notices.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDetail => "course.view_detail",
            Self::EditMetadata => "course.edit_metadata",
            Self::ManageRoster => "course.manage_roster",
            Self::CreateLesson => "course.create_lesson",
        }
    }
}

impl CourseRoles {
    /// Evaluates the decision table for one action.
    ///
    /// The creator role dominates the instructor role, so a corrupted
    /// record listing the creator on its own roster changes no outcome.
    /// Editing or deleting one specific lesson is not decided here; that
    /// right belongs to [`crate::LessonAccess`].
    #[must_use]
    pub fn allows(&self, action: CourseAction) -> bool {
        match action {
            CourseAction::ViewDetail | CourseAction::CreateLesson => {
                self.is_creator() || self.is_instructor()
            }
            CourseAction::EditMetadata | CourseAction::ManageRoster => self.is_creator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use coursegate_core::{ResourceId, UserIdentity};

    use crate::{Course, CourseInput, CourseRoles};

    use super::CourseAction;

    fn roles_for(user_id: i64) -> CourseRoles {
        let course = Course::new(CourseInput {
            id: ResourceId::from("course-1"),
            name: "Rust Fundamentals".to_owned(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap_or_default(),
            creator_id: ResourceId::from(1),
            instructors: vec![ResourceId::from(7)],
        })
        .unwrap_or_else(|_| unreachable!());

        CourseRoles::resolve(&UserIdentity::new(user_id, "user"), &course)
    }

    #[test]
    fn creator_is_allowed_every_action() {
        let roles = roles_for(1);
        assert!(roles.allows(CourseAction::ViewDetail));
        assert!(roles.allows(CourseAction::EditMetadata));
        assert!(roles.allows(CourseAction::ManageRoster));
        assert!(roles.allows(CourseAction::CreateLesson));
    }

    #[test]
    fn instructor_views_and_creates_lessons_only() {
        let roles = roles_for(7);
        assert!(roles.allows(CourseAction::ViewDetail));
        assert!(roles.allows(CourseAction::CreateLesson));
        assert!(!roles.allows(CourseAction::EditMetadata));
        assert!(!roles.allows(CourseAction::ManageRoster));
    }

    #[test]
    fn outsider_is_denied_everything() {
        let roles = roles_for(9);
        assert!(!roles.allows(CourseAction::ViewDetail));
        assert!(!roles.allows(CourseAction::EditMetadata));
        assert!(!roles.allows(CourseAction::ManageRoster));
        assert!(!roles.allows(CourseAction::CreateLesson));
    }
}
