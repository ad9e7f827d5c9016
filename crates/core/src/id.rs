//! Identifier canonicalization.
//!
//! The record store mixes integer-typed and string-typed identifiers for
//! the same logical entity: manually inserted records carry numbers while
//! generated ones carry UUID strings. Equality must not silently fail
//! across that boundary, so every comparison goes through one canonical
//! form instead of ad hoc coercion at call sites.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier as stored: a base-10 integer or an opaque string token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Integer identifier from manual insertion paths.
    Number(i64),
    /// String identifier, typically a generated UUID.
    Text(String),
}

/// Canonical comparison key for a [`ResourceId`].
///
/// A numeric string canonicalizes to the integer it spells; any other
/// string canonicalizes to itself unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalKey {
    /// Identifier that is, or spells, a base-10 integer.
    Number(i64),
    /// Opaque string identifier that never coerces to a number.
    Text(String),
}

impl ResourceId {
    /// Returns the canonical comparison form of this identifier.
    #[must_use]
    pub fn canonical(&self) -> CanonicalKey {
        match self {
            Self::Number(value) => CanonicalKey::Number(*value),
            Self::Text(value) => value
                .parse::<i64>()
                .map_or_else(|_| CanonicalKey::Text(value.clone()), CanonicalKey::Number),
        }
    }
}

impl PartialEq for ResourceId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ResourceId {}

impl Hash for ResourceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl Display for ResourceId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value}"),
        }
    }
}

impl Display for CanonicalKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{CanonicalKey, ResourceId};

    #[test]
    fn numeric_string_compares_equal_to_native_number() {
        assert_eq!(ResourceId::from(7), ResourceId::from("7"));
        assert_eq!(ResourceId::from("7").canonical(), CanonicalKey::Number(7));
    }

    #[test]
    fn opaque_string_never_coerces_to_a_number() {
        assert_ne!(ResourceId::from("uuid-abc"), ResourceId::from(0));
        assert_eq!(
            ResourceId::from("uuid-abc").canonical(),
            CanonicalKey::Text("uuid-abc".to_owned())
        );
    }

    #[test]
    fn hash_matches_canonical_equality() {
        let mut seen = HashSet::new();
        seen.insert(ResourceId::from(7));
        assert!(seen.contains(&ResourceId::from("7")));
        assert!(!seen.contains(&ResourceId::from("seven")));
    }

    #[test]
    fn mixed_typed_json_deserializes_into_both_variants() {
        let numeric: Result<ResourceId, _> = serde_json::from_str("7");
        let text: Result<ResourceId, _> = serde_json::from_str("\"4f2b\"");
        assert!(numeric.is_ok());
        assert!(text.is_ok());
        assert_eq!(numeric.unwrap_or(ResourceId::from(0)), ResourceId::from(7));
        assert_eq!(
            text.unwrap_or(ResourceId::from(0)),
            ResourceId::from("4f2b")
        );
    }

    #[test]
    fn oversized_numeric_string_stays_text() {
        let id = ResourceId::from("99999999999999999999999999");
        assert!(matches!(id.canonical(), CanonicalKey::Text(_)));
    }
}
