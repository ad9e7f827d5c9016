use std::collections::HashSet;

use chrono::NaiveDate;
use coursegate_core::{AppError, AppResult, ResourceId};
use serde::{Deserialize, Serialize};

/// Input payload for course create/update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInput {
    /// Course identifier.
    pub id: ResourceId,
    /// Course display name.
    pub name: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// First day of the course.
    pub start_date: NaiveDate,
    /// Last day of the course.
    pub end_date: NaiveDate,
    /// Identity that created the course.
    pub creator_id: ResourceId,
    /// Instructor roster in insertion order.
    pub instructors: Vec<ResourceId>,
}

/// A course record.
///
/// The validated constructor enforces the roster invariants; records
/// loaded from the store deserialize directly, so corrupted data (for
/// example a creator also listed as instructor) stays representable and
/// is absorbed by role resolution instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    id: ResourceId,
    name: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    creator_id: ResourceId,
    #[serde(default)]
    instructors: Vec<ResourceId>,
}

fn validated_metadata(
    name: &str,
    description: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<String> {
    let name = name.trim().to_owned();
    if name.chars().count() < 3 {
        return Err(AppError::Validation(
            "course name must be at least 3 characters".to_owned(),
        ));
    }

    if description.chars().count() > 500 {
        return Err(AppError::Validation(
            "course description must not exceed 500 characters".to_owned(),
        ));
    }

    if end_date < start_date {
        return Err(AppError::Validation(
            "course end date must not precede the start date".to_owned(),
        ));
    }

    Ok(name)
}

impl Course {
    /// Creates a validated course.
    pub fn new(input: CourseInput) -> AppResult<Self> {
        let name = validated_metadata(
            &input.name,
            &input.description,
            input.start_date,
            input.end_date,
        )?;

        let mut seen = HashSet::new();
        for instructor_id in &input.instructors {
            if instructor_id == &input.creator_id {
                return Err(AppError::Validation(format!(
                    "course creator '{}' must not appear in the instructor roster",
                    input.creator_id
                )));
            }
            if !seen.insert(instructor_id.canonical()) {
                return Err(AppError::Validation(format!(
                    "duplicate instructor '{instructor_id}' in roster"
                )));
            }
        }

        Ok(Self {
            id: input.id,
            name,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            creator_id: input.creator_id,
            instructors: input.instructors,
        })
    }

    /// Returns the course with new name, description and dates.
    ///
    /// Only the incoming fields are validated; the creator and roster
    /// are carried over verbatim, so a record whose stored roster is
    /// corrupted stays editable by its creator.
    pub fn with_metadata(
        &self,
        name: String,
        description: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Self> {
        let name = validated_metadata(&name, &description, start_date, end_date)?;

        let mut updated = self.clone();
        updated.name = name;
        updated.description = description;
        updated.start_date = start_date;
        updated.end_date = end_date;
        Ok(updated)
    }

    /// Returns the course with `candidate` appended to the roster.
    ///
    /// The course is left untouched when the candidate is already a
    /// roster member under canonical comparison.
    pub fn with_instructor(&self, candidate: ResourceId) -> AppResult<Self> {
        if candidate == self.creator_id {
            return Err(AppError::Validation(format!(
                "course creator '{candidate}' cannot join the instructor roster"
            )));
        }

        if self.instructors.contains(&candidate) {
            return Err(AppError::DuplicateInstructor(format!(
                "instructor '{candidate}' is already on course '{}'",
                self.id
            )));
        }

        let mut updated = self.clone();
        updated.instructors.push(candidate);
        Ok(updated)
    }

    /// Returns the course with the first canonical match removed from the
    /// roster. Removing a non-member is a no-op, not a fault.
    #[must_use]
    pub fn without_instructor(&self, instructor_id: &ResourceId) -> Self {
        let mut updated = self.clone();
        if let Some(position) = updated
            .instructors
            .iter()
            .position(|member| member == instructor_id)
        {
            updated.instructors.remove(position);
        }
        updated
    }

    /// Returns the course identifier.
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Returns the course display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the course description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the first day of the course.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the last day of the course.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the creator identifier.
    #[must_use]
    pub fn creator_id(&self) -> &ResourceId {
        &self.creator_id
    }

    /// Returns the instructor roster in insertion order.
    #[must_use]
    pub fn instructors(&self) -> &[ResourceId] {
        &self.instructors
    }
}
