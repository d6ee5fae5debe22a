use blogdesk_auth::create_access_token;
use blogdesk_config::JwtConfig;
use blogdesk_core::{AppError, verify_password};
use blogdesk_models::{LoginRequest, LoginResponse};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::metrics::{track_jwt_issued, track_login_failure, track_login_success};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config), fields(user.email = %dto.email, db.table = "users"))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            email: String,
            password: String,
        }

        let Some(user) = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        else {
            track_login_failure("user_not_found");
            return Err(AppError::unauthorized("User not found"));
        };

        if !verify_password(&dto.password, &user.password)? {
            track_login_failure("invalid_password");
            return Err(AppError::unauthorized(
                "Invalid credentials - Password incorrect",
            ));
        }

        let access_token = create_access_token(user.id, &user.email, jwt_config)?;
        track_jwt_issued();
        track_login_success();
        debug!(user.id = %user.id, "Access token issued");

        Ok(LoginResponse {
            access_token,
            email: user.email,
        })
    }
}
