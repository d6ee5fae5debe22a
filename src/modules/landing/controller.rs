use axum::extract::State;
use blogdesk_core::{ApiResponse, AppError, Paginated};
use blogdesk_models::{Blog, BlogListParams, ListScope, SlugRequest, build_query};
use tracing::instrument;

use crate::docs::ErrorEnvelope;
use crate::modules::blogs::service::BlogService;
use crate::state::AppState;
use crate::validator::LenientJson;

/// Paginated public listing
#[utoipa::path(
    post,
    path = "/landing/blogs/list",
    request_body = BlogListParams,
    responses(
        (status = 200, description = "`Data` is `{docs: Blog[], totalDocs}`; pages of 10 by default", body = [Blog]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tag = "Landing"
)]
#[instrument(skip(state))]
pub async fn list_blogs_paginated(
    State(state): State<AppState>,
    LenientJson(params): LenientJson<BlogListParams>,
) -> Result<ApiResponse<Paginated<Blog>>, AppError> {
    let query = build_query(&params, ListScope::Landing);
    let page = BlogService::list(&state.db, &query).await?;
    Ok(ApiResponse::ok("Paginated blog list fetched successfully", page))
}

/// Full public listing; pages only when a positive `limit` is sent
#[utoipa::path(
    post,
    path = "/landing/blogs",
    request_body = BlogListParams,
    responses(
        (status = 200, description = "`Data` is every matching post", body = [Blog]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tag = "Landing"
)]
#[instrument(skip(state))]
pub async fn list_all_blogs(
    State(state): State<AppState>,
    LenientJson(params): LenientJson<BlogListParams>,
) -> Result<ApiResponse<Vec<Blog>>, AppError> {
    let query = build_query(&params, ListScope::All);
    let blogs = BlogService::list_all(&state.db, &query).await?;
    Ok(ApiResponse::ok("Full blog list fetched successfully", blogs))
}

/// Fetch one post by slug
#[utoipa::path(
    post,
    path = "/landing/blogs/getone",
    request_body = SlugRequest,
    responses(
        (status = 200, description = "`Data` is the post", body = Blog),
        (status = 400, description = "url_slug missing or not a string", body = ErrorEnvelope),
        (status = 404, description = "No post with that slug", body = ErrorEnvelope)
    ),
    tag = "Landing"
)]
#[instrument(skip(state))]
pub async fn get_blog_by_slug(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<SlugRequest>,
) -> Result<ApiResponse<Blog>, AppError> {
    let slug = body.require_slug()?;
    let blog = BlogService::find_by_slug(&state.db, slug).await?;
    Ok(ApiResponse::ok("Blog fetched successfully", blog))
}

/// Every slug, for sitemap generation
#[utoipa::path(
    post,
    path = "/landing/sitemap",
    responses(
        (status = 200, description = "`Data` is an array of slugs", body = [String]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tag = "Landing"
)]
#[instrument(skip(state))]
pub async fn sitemap(State(state): State<AppState>) -> Result<ApiResponse<Vec<String>>, AppError> {
    let slugs = BlogService::list_slugs(&state.db).await?;
    Ok(ApiResponse::ok("All routes fetched successfully", slugs))
}
