use serde::Serialize;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use blogdesk_models::{
    Blog, BlogIdRequest, BlogListParams, LoginRequest, LoginResponse, OtherImage,
    SaveBlogRequest, SlugRequest, UploadResponse,
};

/// The envelope every response is wrapped in. Success bodies carry the
/// documented schema in `Data`; failures carry `null`.
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    #[serde(rename = "IsSuccess")]
    #[schema(example = false)]
    pub is_success: bool,
    #[serde(rename = "Message")]
    #[schema(example = "Blog not found")]
    pub message: String,
    #[serde(rename = "Data")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    /// Only on missing-field validation failures.
    pub errors: Option<Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::auth::controller::login,
        crate::modules::blogs::controller::list_blogs,
        crate::modules::blogs::controller::get_blog,
        crate::modules::blogs::controller::save_blog,
        crate::modules::blogs::controller::remove_blog,
        crate::modules::blogs::controller::upload_image,
        crate::modules::landing::controller::list_blogs_paginated,
        crate::modules::landing::controller::list_all_blogs,
        crate::modules::landing::controller::get_blog_by_slug,
        crate::modules::landing::controller::sitemap,
    ),
    components(
        schemas(
            Blog,
            OtherImage,
            BlogListParams,
            BlogIdRequest,
            SlugRequest,
            SaveBlogRequest,
            UploadResponse,
            LoginRequest,
            LoginResponse,
            ErrorEnvelope,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin login"),
        (name = "Blogs", description = "Admin blog management"),
        (name = "Landing", description = "Public blog reads"),
        (name = "Health", description = "Liveness")
    ),
    info(
        title = "Blogdesk API",
        version = "0.1.0",
        description = "Blog content management API built with Rust, Axum, and PostgreSQL. Every response is wrapped in `{IsSuccess, Message, Data}`.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
