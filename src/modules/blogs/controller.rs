use axum::Extension;
use axum::extract::{Multipart, State};
use blogdesk_core::{ApiResponse, AppError, Paginated};
use blogdesk_models::blogs::parse_blog_id;
use blogdesk_models::{
    Blog, BlogIdRequest, BlogListParams, ListScope, SaveBlogRequest, UploadResponse,
    build_query, validate_blog,
};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::service::BlogService;
use crate::docs::ErrorEnvelope;
use crate::metrics::{track_blog_removed, track_blog_saved, track_upload};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::LenientJson;

/// List the admin's own posts, newest first
#[utoipa::path(
    post,
    path = "/admin/blogs/list",
    request_body = BlogListParams,
    responses(
        (status = 200, description = "`Data` is `{docs: Blog[], totalDocs}`; pages of 9 by default", body = [Blog]),
        (status = 401, description = "Missing or invalid token", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn list_blogs(
    State(state): State<AppState>,
    LenientJson(params): LenientJson<BlogListParams>,
) -> Result<ApiResponse<Paginated<Blog>>, AppError> {
    let query = build_query(&params, ListScope::Admin);
    let page = BlogService::list(&state.db, &query).await?;
    Ok(ApiResponse::ok("Blog list fetched successfully", page))
}

/// Fetch one post by id
#[utoipa::path(
    post,
    path = "/admin/blogs/getone",
    request_body = BlogIdRequest,
    responses(
        (status = 200, description = "`Data` is the post", body = Blog),
        (status = 400, description = "Missing or malformed blogid", body = ErrorEnvelope),
        (status = 401, description = "Missing or invalid token", body = ErrorEnvelope),
        (status = 404, description = "No post with that id", body = ErrorEnvelope)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<BlogIdRequest>,
) -> Result<ApiResponse<Blog>, AppError> {
    let id = body.require_id()?;
    let blog = BlogService::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::ok("Blog fetched successfully", blog))
}

/// Create a post, or replace one when `blogid` is present
#[utoipa::path(
    post,
    path = "/admin/blogs/save",
    request_body = SaveBlogRequest,
    responses(
        (status = 201, description = "Created; `Data` is the new post", body = Blog),
        (status = 200, description = "Updated; `Data` is the stored post", body = Blog),
        (status = 400, description = "Validation failed; missing fields are listed in `errors`", body = ErrorEnvelope),
        (status = 401, description = "Missing or invalid token", body = ErrorEnvelope),
        (status = 404, description = "No post with that blogid", body = ErrorEnvelope)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state, auth_user, body), fields(user.email = %auth_user.email()))]
pub async fn save_blog(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    LenientJson(body): LenientJson<Map<String, Value>>,
) -> Result<ApiResponse<Blog>, AppError> {
    let blog = validate_blog(&body).map_err(|e| e.into_app_error())?;

    let blog_id = match body.get("blogid") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(raw)) if raw.is_empty() => None,
        Some(Value::String(raw)) => Some(parse_blog_id(raw)?),
        Some(_) => return Err(AppError::bad_request(anyhow::anyhow!("Invalid blogid"))),
    };

    match blog_id {
        None => {
            let created = BlogService::create(&state.db, &blog).await?;
            track_blog_saved("created");
            info!(blog.id = %created.id, "Blog created");
            Ok(ApiResponse::created("Blog created successfully", created))
        }
        Some(id) => {
            let updated = BlogService::update(&state.db, id, &blog).await?;
            track_blog_saved("updated");
            info!(blog.id = %updated.id, "Blog updated");
            Ok(ApiResponse::ok("Blog updated successfully", updated))
        }
    }
}

/// Delete a post
#[utoipa::path(
    post,
    path = "/admin/blogs/remove",
    request_body = BlogIdRequest,
    responses(
        (status = 200, description = "Removed; `Data` is null"),
        (status = 400, description = "Missing or malformed blogid", body = ErrorEnvelope),
        (status = 401, description = "Missing or invalid token", body = ErrorEnvelope),
        (status = 404, description = "No post with that id", body = ErrorEnvelope)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn remove_blog(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<BlogIdRequest>,
) -> Result<ApiResponse<()>, AppError> {
    let id = body.require_id()?;
    BlogService::delete(&state.db, id).await?;
    track_blog_removed();
    Ok(ApiResponse::message_only("Blog removed successfully"))
}

/// Upload an image as multipart field `file`
#[utoipa::path(
    post,
    path = "/admin/blogs/upload",
    request_body(content_type = "multipart/form-data", description = "Form with a single `file` field"),
    responses(
        (status = 200, description = "`Data` is `{imagePath}`", body = UploadResponse),
        (status = 400, description = "No file, or file too large", body = ErrorEnvelope),
        (status = 401, description = "Missing or invalid token", body = ErrorEnvelope)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<ApiResponse<UploadResponse>, AppError> {
    let invalid = |e: axum::extract::multipart::MultipartError| {
        AppError::bad_request(anyhow::anyhow!("Invalid upload: {}", e.body_text()))
    };

    while let Some(field) = multipart.next_field().await.map_err(invalid)? {
        if field.name() != Some("file") {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let content = field.bytes().await.map_err(invalid)?;
        let image_path = BlogService::store_image(state.storage.as_ref(), &file_name, &content).await?;
        track_upload(content.len());

        return Ok(ApiResponse::ok(
            "File uploaded successfully",
            UploadResponse { image_path },
        ));
    }

    Err(AppError::bad_request(anyhow::anyhow!("File not uploaded")))
}
