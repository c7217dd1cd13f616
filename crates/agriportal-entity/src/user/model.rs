//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::document::UserDocument;
use super::land::{IrrigationType, SoilType};
use super::role::UserRole;

/// A registered portal user.
///
/// The password hash and the two token allowlists are never serialized
/// outward; handlers additionally project users through a sanitized DTO.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
    /// Land size in acres.
    pub land_size: f64,
    /// Soil classification of the land.
    pub soil_type: SoilType,
    /// Crops currently grown.
    pub crops: Vec<String>,
    /// Skills the user has listed.
    pub skills: Vec<String>,
    /// Profile image URL.
    pub profile_image: Option<String>,
    /// Aadhar identity number.
    pub aadhar_number: Option<String>,
    /// Government farm registration number.
    pub farm_registration_number: Option<String>,
    /// Irrigation method, if declared.
    pub irrigation_type: Option<IrrigationType>,
    /// Metadata of uploaded profile documents.
    pub documents: Json<Vec<UserDocument>>,
    /// Currently-honored access tokens, in issuance order.
    #[serde(skip_serializing, default)]
    pub valid_access_tokens: Vec<String>,
    /// Currently-honored refresh tokens, in issuance order.
    #[serde(skip_serializing, default)]
    pub valid_refresh_tokens: Vec<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the given access token is in the allowlist.
    pub fn honors_access_token(&self, token: &str) -> bool {
        self.valid_access_tokens.iter().any(|t| t == token)
    }

    /// Check whether the given refresh token is in the allowlist.
    pub fn honors_refresh_token(&self, token: &str) -> bool {
        self.valid_refresh_tokens.iter().any(|t| t == token)
    }
}

/// Data required to create a new user. The password arrives pre-hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email, already trimmed and lowercased.
    pub email: String,
    /// Argon2 hash of the raw password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
    /// Land size in acres.
    pub land_size: f64,
    /// Soil classification.
    pub soil_type: SoilType,
}

/// Full profile replacement for an existing user.
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    /// The user to update.
    pub id: Uuid,
    /// New display name.
    pub name: String,
    /// New email.
    pub email: String,
    /// New phone number.
    pub phone: String,
    /// New location.
    pub location: String,
    /// Land size in acres.
    pub land_size: f64,
    /// Soil classification.
    pub soil_type: SoilType,
    /// Crops grown.
    pub crops: Vec<String>,
    /// Listed skills.
    pub skills: Vec<String>,
    /// Profile image URL.
    pub profile_image: Option<String>,
    /// Aadhar identity number.
    pub aadhar_number: Option<String>,
    /// Farm registration number.
    pub farm_registration_number: Option<String>,
    /// Irrigation method.
    pub irrigation_type: Option<IrrigationType>,
    /// Replacement document metadata list.
    pub documents: Vec<UserDocument>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: UserRole::Farmer,
            phone: None,
            location: None,
            land_size: 2.5,
            soil_type: SoilType::Alluvial,
            crops: vec!["wheat".to_string()],
            skills: vec![],
            profile_image: None,
            aadhar_number: None,
            farm_registration_number: None,
            irrigation_type: None,
            documents: Json(vec![]),
            valid_access_tokens: vec!["acc-1".to_string()],
            valid_refresh_tokens: vec!["ref-1".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_serialization_hides_secrets() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("valid_access_tokens").is_none());
        assert!(value.get("valid_refresh_tokens").is_none());
        assert_eq!(value["email"], "a@x.com");
    }

    #[test]
    fn test_allowlist_membership() {
        let user = sample_user();
        assert!(user.honors_access_token("acc-1"));
        assert!(!user.honors_access_token("acc-2"));
        assert!(user.honors_refresh_token("ref-1"));
        assert!(!user.honors_refresh_token("acc-1"));
    }
}
