use async_trait::async_trait;
use coursegate_application::CandidateInstructorSource;
use coursegate_core::{AppResult, ResourceId};
use uuid::Uuid;

/// Candidate instructor source that mints a fresh opaque identifier.
///
/// UUID candidates never collide with numeric user identifiers, so a
/// minted candidate can only be a duplicate if it was already admitted
/// to the same roster.
#[derive(Debug, Clone, Default)]
pub struct UuidCandidateSource;

impl UuidCandidateSource {
    /// Creates a new UUID candidate source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CandidateInstructorSource for UuidCandidateSource {
    async fn next_candidate(&self) -> AppResult<ResourceId> {
        Ok(ResourceId::from(Uuid::new_v4().to_string()))
    }
}
