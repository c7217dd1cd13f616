//! Uploaded document metadata.
//!
//! The portal stores only the metadata of documents a farmer has attached
//! to their profile (land records, identity proofs). The binary itself
//! lives with an external media host outside this service.

use serde::{Deserialize, Serialize};

/// Metadata for a single profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    /// Document category, e.g. `"land_record"` or `"identity"`.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Public URL of the stored document.
    pub url: String,
    /// Display name of the document.
    pub name: String,
    /// Identifier assigned by the external media host, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_uses_type_key() {
        let doc = UserDocument {
            doc_type: "land_record".to_string(),
            url: "https://media.example.com/doc.pdf".to_string(),
            name: "Land record".to_string(),
            public_id: Some("abc123".to_string()),
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "land_record");
        assert!(value.get("doc_type").is_none());

        let back: UserDocument = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_public_id_optional() {
        let value = serde_json::json!({
            "type": "identity",
            "url": "https://media.example.com/id.png",
            "name": "Aadhar card"
        });
        let doc: UserDocument = serde_json::from_value(value).unwrap();
        assert!(doc.public_id.is_none());
    }
}
