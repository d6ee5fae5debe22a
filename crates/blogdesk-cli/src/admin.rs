//! Admin account creation.

use blogdesk_models::{User, prepare_credential};
use sqlx::PgPool;

/// Inserts the admin user. Fails if the email is already taken.
pub async fn create_admin(
    db: &PgPool,
    email: &str,
    password: &str,
) -> Result<User, Box<dyn std::error::Error>> {
    let credential = prepare_credential(email, password)
        .map_err(|e| format!("Failed to prepare credential: {}", e.error))?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password)
         VALUES ($1, $2)
         ON CONFLICT (email) DO NOTHING
         RETURNING id, email, created_at, updated_at",
    )
    .bind(&credential.email)
    .bind(&credential.password_hash)
    .fetch_optional(db)
    .await?;

    user.ok_or_else(|| "User with this email already exists".into())
}
