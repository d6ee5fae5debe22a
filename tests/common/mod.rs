use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use blogdesk::config::{CorsConfig, JwtConfig, UploadConfig};
use blogdesk::modules::blogs::service::BlogService;
use blogdesk::router::init_router;
use blogdesk::state::AppState;
use blogdesk_auth::create_access_token;
use blogdesk_models::{Blog, prepare_credential, validate_blog};
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes";

/// A router over a fresh pool. The upload directory lives as long as this
/// value does.
#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub uploads: TempDir,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> TestApp {
    setup_test_app_with_upload_limit(pool, 1024 * 1024)
}

pub fn setup_test_app_with_upload_limit(pool: PgPool, max_bytes: usize) -> TestApp {
    let uploads = tempfile::tempdir().unwrap();
    let state = AppState::new(
        pool,
        test_jwt_config(),
        CorsConfig::from_list("*"),
        UploadConfig {
            dir: uploads.path().to_path_buf(),
            public_path: "/uploads".to_string(),
            max_bytes,
        },
    );

    TestApp {
        router: init_router(state.clone()),
        state,
        uploads,
    }
}

#[allow(dead_code)]
pub fn admin_token() -> String {
    create_access_token(Uuid::new_v4(), "admin@test.com", &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub async fn create_test_admin(pool: &PgPool, email: &str, password: &str) -> Uuid {
    let credential = prepare_credential(email, password).unwrap();
    sqlx::query_scalar::<_, Uuid>("INSERT INTO users (email, password) VALUES ($1, $2) RETURNING id")
        .bind(&credential.email)
        .bind(&credential.password_hash)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A save body that passes validation.
pub fn valid_blog_body(slug: &str) -> Map<String, Value> {
    let value = json!({
        "banner_image": "/uploads/1-banner.png",
        "banner_alttext": "Banner",
        "category": "engineering",
        "title": format!("Post {}", slug),
        "blog_date": "05-03-2024",
        "brief": "A short brief",
        "meta_title": "Meta title",
        "url_slug": slug,
        "canonical": format!("https://example.com/{}", slug),
        "og_title": "OG title",
        "og_description": "OG description",
        "og_url": format!("https://example.com/{}", slug),
        "og_type": "article",
        "og_sitename": "Example",
        "meta_description": "Meta description"
    });
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Inserts a post directly through the service layer.
#[allow(dead_code)]
pub async fn create_test_blog(pool: &PgPool, body: Map<String, Value>) -> Blog {
    let blog = validate_blog(&body).unwrap();
    BlogService::create(pool, &blog).await.unwrap()
}

/// Moves a post's `created_at` back so list ordering is deterministic.
#[allow(dead_code)]
pub async fn age_blog(pool: &PgPool, id: Uuid, hours: i32) {
    sqlx::query("UPDATE blogs SET created_at = NOW() - make_interval(hours => $2) WHERE id = $1")
        .bind(id)
        .bind(hours)
        .execute(pool)
        .await
        .unwrap();
}

pub fn unique_slug() -> String {
    format!("post-{}", Uuid::new_v4().simple())
}

/// Sends a POST with a JSON body and returns the status and parsed body.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: Value,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
