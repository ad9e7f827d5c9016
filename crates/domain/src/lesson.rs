use std::str::FromStr;

use chrono::NaiveDate;
use coursegate_core::{AppError, AppResult, ResourceId};
use serde::{Deserialize, Serialize};
use url::Url;

/// Publication status of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    /// Not yet visible to participants.
    Draft,
    /// Live and visible.
    Published,
    /// Retired from the active list.
    Archived,
}

impl LessonStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for LessonStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(AppError::Validation(format!(
                "unknown lesson status '{value}'"
            ))),
        }
    }
}

/// Input payload for lesson create/update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonInput {
    /// Lesson identifier.
    pub id: ResourceId,
    /// Parent course identifier.
    pub course_id: ResourceId,
    /// Lesson title.
    pub title: String,
    /// Publication status.
    pub status: LessonStatus,
    /// Date the lesson goes live.
    pub publish_date: NaiveDate,
    /// Video URL for the lesson content.
    pub video_url: String,
    /// Identity that authored the lesson; not necessarily the course creator.
    pub creator_id: ResourceId,
}

/// A lesson record belonging to one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    id: ResourceId,
    course_id: ResourceId,
    title: String,
    status: LessonStatus,
    publish_date: NaiveDate,
    video_url: String,
    creator_id: ResourceId,
}

impl Lesson {
    /// Creates a validated lesson.
    pub fn new(input: LessonInput) -> AppResult<Self> {
        let title = input.title.trim().to_owned();
        if title.chars().count() < 3 {
            return Err(AppError::Validation(
                "lesson title must be at least 3 characters".to_owned(),
            ));
        }

        Url::parse(input.video_url.as_str()).map_err(|error| {
            AppError::Validation(format!(
                "invalid lesson video URL '{}': {error}",
                input.video_url
            ))
        })?;

        Ok(Self {
            id: input.id,
            course_id: input.course_id,
            title,
            status: input.status,
            publish_date: input.publish_date,
            video_url: input.video_url,
            creator_id: input.creator_id,
        })
    }

    /// Returns the lesson identifier.
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Returns the parent course identifier.
    #[must_use]
    pub fn course_id(&self) -> &ResourceId {
        &self.course_id
    }

    /// Returns the lesson title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the publication status.
    #[must_use]
    pub fn status(&self) -> LessonStatus {
        self.status
    }

    /// Returns the date the lesson goes live.
    #[must_use]
    pub fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    /// Returns the video URL.
    #[must_use]
    pub fn video_url(&self) -> &str {
        self.video_url.as_str()
    }

    /// Returns the identity that authored the lesson.
    #[must_use]
    pub fn creator_id(&self) -> &ResourceId {
        &self.creator_id
    }
}
