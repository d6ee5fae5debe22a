use axum::extract::State;
use blogdesk_core::{ApiResponse, AppError};
use blogdesk_models::{LoginRequest, LoginResponse};
use tracing::instrument;

use super::service::AuthService;
use crate::docs::ErrorEnvelope;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Log in as the admin and receive a bearer token
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; `Data` holds the token", body = LoginResponse),
        (status = 400, description = "Malformed body or invalid email", body = ErrorEnvelope),
        (status = 401, description = "Unknown email or wrong password", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(ApiResponse::ok("Login successful", response))
}
