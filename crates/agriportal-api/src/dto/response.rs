//! Response DTOs.
//!
//! Field names are camelCase on the wire. Success bodies always carry
//! `success: true`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agriportal_entity::user::{IrrigationType, SoilType, User, UserDocument, UserRole};

/// Sanitized user projection.
///
/// Never contains the password hash or the token allowlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Phone number.
    pub phone: Option<String>,
    /// Location.
    pub location: Option<String>,
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
    /// Uploaded document metadata.
    pub documents: Vec<UserDocument>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            phone: user.phone,
            location: user.location,
            land_size: user.land_size,
            soil_type: user.soil_type,
            crops: user.crops,
            skills: user.skills,
            profile_image: user.profile_image,
            aadhar_number: user.aadhar_number,
            farm_registration_number: user.farm_registration_number,
            irrigation_type: user.irrigation_type,
            documents: user.documents.0,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Token pair + user payload returned by signup, login, and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Always `true`.
    pub success: bool,
    /// Access token.
    pub token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Sanitized user.
    pub user: UserResponse,
    /// Human-readable outcome.
    pub message: String,
}

impl AuthResponse {
    /// Builds the standard lifecycle response.
    pub fn new(token: String, refresh_token: String, user: User, message: &str) -> Self {
        Self {
            success: true,
            token,
            refresh_token,
            user: user.into(),
            message: message.to_string(),
        }
    }
}

/// Single-user payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Always `true`.
    pub success: bool,
    /// Sanitized user.
    pub user: UserResponse,
    /// Optional human-readable outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true`.
    pub success: bool,
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Database connectivity: `"connected"` or `"unreachable"`.
    pub database: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: UserRole::Farmer,
            phone: Some("9876543210".to_string()),
            location: Some("Nashik".to_string()),
            land_size: 1.5,
            soil_type: SoilType::Black,
            crops: vec!["grapes".to_string()],
            skills: vec![],
            profile_image: None,
            aadhar_number: None,
            farm_registration_number: None,
            irrigation_type: Some(IrrigationType::Drip),
            documents: Json(vec![]),
            valid_access_tokens: vec!["acc".to_string()],
            valid_refresh_tokens: vec!["ref".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_response_is_sanitized_and_camel_case() {
        let value = serde_json::to_value(UserResponse::from(sample_user())).unwrap();

        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
        assert!(value.get("validAccessTokens").is_none());
        assert!(value.get("validRefreshTokens").is_none());

        assert_eq!(value["landSize"], 1.5);
        assert_eq!(value["soilType"], "Black");
        assert_eq!(value["irrigationType"], "Drip");
        assert!(value.get("land_size").is_none());
    }

    #[test]
    fn test_auth_response_shape() {
        let resp = AuthResponse::new(
            "acc".to_string(),
            "ref".to_string(),
            sample_user(),
            "Login successful",
        );
        let value = serde_json::to_value(resp).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["token"], "acc");
        assert_eq!(value["refreshToken"], "ref");
        assert_eq!(value["user"]["email"], "a@x.com");
    }
}
