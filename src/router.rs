use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::auth::require_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::blogs::router::init_blogs_router;
use crate::modules::landing::router::init_landing_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use blogdesk_config::CorsConfig;
use blogdesk_core::ApiResponse;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "The server is up")),
    tag = "Health"
)]
pub async fn health() -> ApiResponse<()> {
    ApiResponse::message_only("OK")
}

pub fn init_router(state: AppState) -> Router {
    let uploads_route = format!("/{}", state.upload_config.public_path.trim_matches('/'));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/admin",
            init_auth_router().nest(
                "/blogs",
                init_blogs_router(state.storage.max_file_size())
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
            ),
        )
        .nest("/landing", init_landing_router())
        .nest_service(&uploads_route, ServeDir::new(&state.upload_config.dir))
        .with_state(state.clone())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}
