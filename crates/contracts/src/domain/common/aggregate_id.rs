use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::hash::Hash;
use uuid::Uuid;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the ID to its string form
    fn as_string(&self) -> String;

    /// Parse the ID from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Identifier of a stored enquiry (contact or event)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnquiryId(pub Uuid);

impl EnquiryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EnquiryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EnquiryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_id_string_roundtrip() {
        let id = EnquiryId::new_v4();
        let parsed = EnquiryId::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_enquiry_id_serializes_as_plain_string() {
        let id = EnquiryId::from_string("6f1c9a8e-3b0f-4d5e-9a2b-1c2d3e4f5a6b").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6f1c9a8e-3b0f-4d5e-9a2b-1c2d3e4f5a6b\"");
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        assert!(EnquiryId::from_string("not-a-uuid").is_err());
    }
}
