use async_trait::async_trait;
use coursegate_application::{CourseRepository, LessonRepository};
use coursegate_core::{AppError, AppResult, ResourceId};
use coursegate_domain::{Course, Lesson};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Record store backed by a JSON-over-HTTP document server.
///
/// The server exposes `/courses` and `/lessons` collections with
/// standard REST verbs. It is trusted to store records verbatim and
/// applies no authorization of its own.
pub struct HttpRecordStore {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpRecordStore {
    /// Creates a record store against the given base URL.
    #[must_use]
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> AppResult<Option<T>> {
        let response = self
            .http_client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let value = require_success(response)
            .await?
            .json::<T>()
            .await
            .map_err(decode_error)?;
        Ok(Some(value))
    }

    async fn post<T: Serialize + DeserializeOwned>(&self, path: &str, record: &T) -> AppResult<T> {
        let response = self
            .http_client
            .post(self.endpoint(path))
            .json(record)
            .send()
            .await
            .map_err(transport_error)?;

        require_success(response)
            .await?
            .json::<T>()
            .await
            .map_err(decode_error)
    }

    async fn put<T: Serialize + DeserializeOwned>(&self, path: &str, record: &T) -> AppResult<T> {
        let response = self
            .http_client
            .put(self.endpoint(path))
            .json(record)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "record store has no document at '{path}'"
            )));
        }

        require_success(response)
            .await?
            .json::<T>()
            .await
            .map_err(decode_error)
    }
}

fn transport_error(error: reqwest::Error) -> AppError {
    AppError::Persistence(format!("record store transport error: {error}"))
}

fn decode_error(error: reqwest::Error) -> AppError {
    AppError::Persistence(format!("record store returned a malformed document: {error}"))
}

async fn require_success(response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<response body unavailable>".to_owned());
    Err(AppError::Persistence(format!(
        "record store request failed with status {status}: {body}"
    )))
}

#[async_trait]
impl CourseRepository for HttpRecordStore {
    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        Ok(self.fetch("courses").await?.unwrap_or_default())
    }

    async fn find_course(&self, course_id: &ResourceId) -> AppResult<Option<Course>> {
        self.fetch(&format!("courses/{course_id}")).await
    }

    async fn create_course(&self, course: Course) -> AppResult<Course> {
        self.post("courses", &course).await
    }

    async fn update_course(&self, course: Course) -> AppResult<Course> {
        self.put(&format!("courses/{}", course.id()), &course).await
    }
}

#[async_trait]
impl LessonRepository for HttpRecordStore {
    async fn list_lessons_for_course(&self, course_id: &ResourceId) -> AppResult<Vec<Lesson>> {
        // The server matches query parameters textually, so '7' and 7
        // would be different collections there. Filtering here keeps
        // the lookup canonical.
        let lessons: Vec<Lesson> = self.fetch("lessons").await?.unwrap_or_default();
        Ok(lessons
            .into_iter()
            .filter(|lesson| lesson.course_id() == course_id)
            .collect())
    }

    async fn find_lesson(&self, lesson_id: &ResourceId) -> AppResult<Option<Lesson>> {
        self.fetch(&format!("lessons/{lesson_id}")).await
    }

    async fn create_lesson(&self, lesson: Lesson) -> AppResult<Lesson> {
        self.post("lessons", &lesson).await
    }

    async fn update_lesson(&self, lesson: Lesson) -> AppResult<Lesson> {
        self.put(&format!("lessons/{}", lesson.id()), &lesson).await
    }

    async fn delete_lesson(&self, lesson_id: &ResourceId) -> AppResult<()> {
        let response = self
            .http_client
            .delete(self.endpoint(&format!("lessons/{lesson_id}")))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "lesson '{lesson_id}' does not exist"
            )));
        }

        require_success(response).await?;
        Ok(())
    }
}
