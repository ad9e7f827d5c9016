use serde::{Deserialize, Serialize};

use crate::ResourceId;

/// Currently authenticated user as supplied by the identity source.
///
/// Passed explicitly into every role and policy evaluation rather than
/// held as ambient state, so the core stays testable with synthetic
/// identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    id: ResourceId,
    name: String,
}

impl UserIdentity {
    /// Creates a user identity from authentication data.
    #[must_use]
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns the identifier used as the sole authorization anchor.
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
