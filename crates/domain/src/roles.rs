use coursegate_core::UserIdentity;
use serde::{Deserialize, Serialize};

use crate::{Course, Lesson};

/// Roles a user holds over one course, recomputed on every evaluation.
///
/// Never cached as session state: a roster mutation must be visible to
/// the very next check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRoles {
    is_creator: bool,
    is_instructor: bool,
}

impl CourseRoles {
    /// Derives the role set for a user and course pair.
    ///
    /// Corrupted data may report both roles at once; the policy treats
    /// the creator role as dominant, so the overlap never needs repair.
    #[must_use]
    pub fn resolve(user: &UserIdentity, course: &Course) -> Self {
        Self {
            is_creator: user.id() == course.creator_id(),
            is_instructor: course.instructors().contains(user.id()),
        }
    }

    /// Returns whether the user created the course.
    #[must_use]
    pub fn is_creator(&self) -> bool {
        self.is_creator
    }

    /// Returns whether the user is on the instructor roster.
    #[must_use]
    pub fn is_instructor(&self) -> bool {
        self.is_instructor
    }
}

/// The narrower right to edit or delete one specific lesson.
///
/// Held by the lesson author or the parent course's creator. An
/// instructor who did not author the lesson holds no edit right; this is
/// the one place the role hierarchy is not nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonAccess {
    can_edit: bool,
}

impl LessonAccess {
    /// Derives lesson ownership for a user given the course role set.
    #[must_use]
    pub fn resolve(user: &UserIdentity, lesson: &Lesson, roles: &CourseRoles) -> Self {
        Self {
            can_edit: user.id() == lesson.creator_id() || roles.is_creator(),
        }
    }

    /// Returns whether the user may edit or delete the lesson.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.can_edit
    }
}
