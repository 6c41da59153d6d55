//! Typed identifiers for the Mergington application.
//!
//! Activities are identified by their display name and participants by their
//! email address. Both are plain strings on the wire, but wrapping them in
//! distinct types keeps the two from being swapped in function signatures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper around string identifiers.
///
/// The marker type `T` only exists at compile time; the value is serialized
/// as a bare string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just a string so ids can be used as JSON object keys
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Creates a new ID with the given value.
    ///
    /// # Example
    /// ```
    /// use mergington::id::ActivityId;
    ///
    /// let activity_id = ActivityId::from_string("Chess Club".to_string());
    /// assert_eq!(activity_id.as_str(), "Chess Club");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the string value of the ID.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the ID and returns the inner string value.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivityMarker;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantMarker;

/// Activity IDs are the activity's unique display name, e.g. `"Chess Club"`.
pub type ActivityId = Id<ActivityMarker>;

/// Participant IDs are the student's email address.
pub type ParticipantId = Id<ParticipantMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ActivityId::from_string("Chess Club".to_string());
        assert_eq!(id.as_str(), "Chess Club");
        assert_eq!(id.to_string(), "Chess Club");
    }

    #[test]
    fn test_id_from_str() {
        let id: ParticipantId = "emma@mergington.edu".into();
        assert_eq!(id.as_str(), "emma@mergington.edu");
        assert_eq!(id.into_string(), "emma@mergington.edu");
    }

    #[test]
    fn test_ordering_follows_value() {
        let mut ids: Vec<ActivityId> = vec!["Gym Class".into(), "Art Club".into(), "Chess Club".into()];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(names, ["Art Club", "Chess Club", "Gym Class"]);
    }

    #[test]
    fn test_serde() {
        let original = ParticipantId::from_string("john@mergington.edu".to_string());

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "\"john@mergington.edu\"");

        let deserialized: ParticipantId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_serializes_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(ActivityId::from("Chess Club"), 12);

        let serialized = serde_json::to_string(&map).unwrap();
        assert_eq!(serialized, r#"{"Chess Club":12}"#);
    }
}
