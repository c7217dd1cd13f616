//! User profile handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;
use uuid::Uuid;

use agriportal_core::error::AppError;
use agriportal_entity::user::UserDocument;
use agriportal_entity::user::model::UpdateProfile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::ProfileResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /users/me
pub async fn me(auth: AuthUser) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(ProfileResponse {
        success: true,
        user: auth.user.into(),
        message: None,
    }))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProfileResponse>> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(ProfileResponse {
        success: true,
        user: user.into(),
        message: None,
    }))
}

/// PUT /users/{id}
///
/// Full profile replacement; only the owner may update their own record.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    if auth.user.id != id {
        return Err(AppError::authorization("Not authorized")
            .with_code("NOT_AUTHORIZED")
            .into());
    }

    let (name, email, phone, location) = match (&req.name, &req.email, &req.phone, &req.location) {
        (Some(name), Some(email), Some(phone), Some(location))
            if ![name, email, phone, location]
                .iter()
                .any(|v| v.trim().is_empty()) =>
        {
            (name.clone(), email.clone(), phone.clone(), location.clone())
        }
        _ => {
            return Err(
                AppError::validation("Name, email, phone, and location are required")
                    .with_code("MISSING_REQUIRED_FIELDS")
                    .into(),
            );
        }
    };

    let documents = parse_documents(req.documents.as_ref())?;

    let user = state
        .user_repo
        .update_profile(&UpdateProfile {
            id,
            name,
            email,
            phone,
            location,
            land_size: req.land_size.unwrap_or(0.0),
            soil_type: req.soil_type.unwrap_or_default(),
            crops: req.crops.unwrap_or_default(),
            skills: req.skills.unwrap_or_default(),
            profile_image: req.profile_image,
            aadhar_number: req.aadhar_number,
            farm_registration_number: req.farm_registration_number,
            irrigation_type: req.irrigation_type,
            documents,
        })
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(ProfileResponse {
        success: true,
        user: user.into(),
        message: Some("Profile updated successfully".to_string()),
    }))
}

fn user_not_found() -> AppError {
    AppError::not_found("User not found").with_code("USER_NOT_FOUND")
}

/// Validates the raw `documents` value shape-first.
///
/// A non-array payload and an entry missing type/url/name get distinct
/// error codes so clients can point at the exact mistake.
fn parse_documents(raw: Option<&Value>) -> Result<Vec<UserDocument>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let entries = raw.as_array().ok_or_else(|| {
        AppError::validation("Documents must be an array").with_code("INVALID_DOCUMENTS_FORMAT")
    })?;

    let mut documents = Vec::with_capacity(entries.len());
    for entry in entries {
        let has_required = ["type", "url", "name"].iter().all(|key| {
            entry
                .get(key)
                .and_then(Value::as_str)
                .is_some_and(|v| !v.is_empty())
        });

        if !has_required {
            return Err(
                AppError::validation("Each document must have type, url, and name")
                    .with_code("INVALID_DOCUMENT_FORMAT"),
            );
        }

        let document: UserDocument = serde_json::from_value(entry.clone()).map_err(|_| {
            AppError::validation("Each document must have type, url, and name")
                .with_code("INVALID_DOCUMENT_FORMAT")
        })?;
        documents.push(document);
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_documents_absent() {
        assert!(parse_documents(None).unwrap().is_empty());
    }

    #[test]
    fn test_parse_documents_rejects_non_array() {
        let raw = json!({"type": "identity"});
        let err = parse_documents(Some(&raw)).unwrap_err();
        assert_eq!(err.code, Some("INVALID_DOCUMENTS_FORMAT"));
    }

    #[test]
    fn test_parse_documents_rejects_incomplete_entry() {
        let raw = json!([{"type": "identity", "url": "https://x/doc.png"}]);
        let err = parse_documents(Some(&raw)).unwrap_err();
        assert_eq!(err.code, Some("INVALID_DOCUMENT_FORMAT"));
    }

    #[test]
    fn test_parse_documents_accepts_well_formed() {
        let raw = json!([
            {"type": "identity", "url": "https://x/doc.png", "name": "Aadhar"},
            {"type": "land_record", "url": "https://x/l.pdf", "name": "Record", "public_id": "p1"}
        ]);
        let docs = parse_documents(Some(&raw)).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].doc_type, "identity");
        assert_eq!(docs[1].public_id.as_deref(), Some("p1"));
    }
}
