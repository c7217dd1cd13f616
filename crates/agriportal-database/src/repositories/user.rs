//! User repository implementation.
//!
//! The token allowlists live on the user row, so every allowlist mutation
//! here is a single SQL statement: issuance, revocation, and rotation are
//! each atomic with respect to the row. Rotation is additionally guarded
//! on current membership of the old refresh token, so of two concurrent
//! rotations with the same token exactly one can succeed.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use agriportal_core::error::{AppError, ErrorKind};
use agriportal_core::result::AppResult;
use agriportal_entity::user::model::{CreateUser, UpdateProfile};
use agriportal_entity::user::User;

/// Repository for user CRUD and allowlist operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role, phone, location, land_size, soil_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.phone)
        .bind(&data.location)
        .bind(data.land_size)
        .bind(data.soil_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::validation("Email already in use").with_code("EMAIL_IN_USE")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Replace a user's profile fields.
    pub async fn update_profile(&self, data: &UpdateProfile) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, email = $3, phone = $4, location = $5, \
                              land_size = $6, soil_type = $7, crops = $8, skills = $9, \
                              profile_image = $10, aadhar_number = $11, \
                              farm_registration_number = $12, irrigation_type = $13, \
                              documents = $14, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.location)
        .bind(data.land_size)
        .bind(data.soil_type)
        .bind(&data.crops)
        .bind(&data.skills)
        .bind(&data.profile_image)
        .bind(&data.aadhar_number)
        .bind(&data.farm_registration_number)
        .bind(data.irrigation_type)
        .bind(Json(&data.documents))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))
    }

    /// Append a freshly issued token pair to the user's allowlists.
    ///
    /// Issuance and persistence happen in the same statement; there is no
    /// window where a token has been handed out but not recorded.
    pub async fn append_tokens(
        &self,
        user_id: Uuid,
        access_token: &str,
        refresh_token: &str,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET valid_access_tokens = array_append(valid_access_tokens, $2), \
                              valid_refresh_tokens = array_append(valid_refresh_tokens, $3), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(access_token)
        .bind(refresh_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record tokens", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Clear both allowlists, revoking every outstanding token at once.
    pub async fn clear_tokens(&self, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET valid_access_tokens = '{}', valid_refresh_tokens = '{}', \
                              updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke tokens", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    /// Atomically spend `old_refresh` and record a new token pair.
    ///
    /// Returns `None` when `old_refresh` is no longer in the allowlist,
    /// either because it was already rotated (replay) or revoked.
    pub async fn rotate_refresh_tokens(
        &self,
        user_id: Uuid,
        old_refresh: &str,
        new_access: &str,
        new_refresh: &str,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET valid_access_tokens = array_append(valid_access_tokens, $3), \
                              valid_refresh_tokens = \
                                  array_append(array_remove(valid_refresh_tokens, $2), $4), \
                              updated_at = NOW() \
             WHERE id = $1 AND $2 = ANY(valid_refresh_tokens) \
             RETURNING *",
        )
        .bind(user_id)
        .bind(old_refresh)
        .bind(new_access)
        .bind(new_refresh)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to rotate refresh token", e)
        })
    }
}
