//! The admin user.

use blogdesk_core::{AppError, hash_password};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An admin account as it leaves the store. The password hash is never
/// selected into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Email plus an already-hashed password, ready to insert.
#[derive(Debug, Clone)]
pub struct PreparedCredential {
    pub email: String,
    pub password_hash: String,
}

/// Hashes `password` so the credential can be persisted. Callers invoke
/// this explicitly before any insert; nothing hashes implicitly on save.
pub fn prepare_credential(email: &str, password: &str) -> Result<PreparedCredential, AppError> {
    if email.trim().is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!("email is required")));
    }
    if password.is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!("password is required")));
    }

    Ok(PreparedCredential {
        email: email.to_string(),
        password_hash: hash_password(password)?,
    })
}
