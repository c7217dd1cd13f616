//! Request DTOs.
//!
//! Required fields are `Option` on purpose: the endpoints answer a missing
//! field with their own `MISSING_*` code instead of a generic
//! deserialization rejection, so presence is checked in the handlers.

use serde::{Deserialize, Serialize};
use validator::Validate;

use agriportal_entity::user::{IrrigationType, SoilType};

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Raw password.
    #[validate(length(min = 7, message = "Password must be at least 7 characters"))]
    pub password: Option<String>,
    /// Requested role; defaults to `farmer`.
    pub role: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
    /// Land size in acres.
    pub land_size: Option<f64>,
    /// Soil classification.
    pub soil_type: Option<SoilType>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: Option<String>,
    /// Raw password.
    pub password: Option<String>,
}

/// Logout / token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    /// Refresh token previously issued to this client.
    pub refresh_token: Option<String>,
}

/// Full profile replacement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Display name (required).
    pub name: Option<String>,
    /// Email address (required).
    pub email: Option<String>,
    /// Phone number (required).
    pub phone: Option<String>,
    /// Location (required).
    pub location: Option<String>,
    /// Land size in acres; defaults to 0.
    pub land_size: Option<f64>,
    /// Soil classification; defaults to Alluvial.
    pub soil_type: Option<SoilType>,
    /// Crops grown.
    pub crops: Option<Vec<String>>,
    /// Listed skills.
    pub skills: Option<Vec<String>>,
    /// Profile image URL.
    pub profile_image: Option<String>,
    /// Aadhar identity number.
    pub aadhar_number: Option<String>,
    /// Farm registration number.
    pub farm_registration_number: Option<String>,
    /// Irrigation method.
    pub irrigation_type: Option<IrrigationType>,
    /// Document metadata list; validated shape-first so malformed input
    /// gets its own error code.
    pub documents: Option<serde_json::Value>,
}
