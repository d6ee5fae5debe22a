use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::{get_blog_by_slug, list_all_blogs, list_blogs_paginated, sitemap};

pub fn init_landing_router() -> Router<AppState> {
    Router::new()
        .route("/blogs/list", post(list_blogs_paginated))
        .route("/blogs", post(list_all_blogs))
        .route("/blogs/getone", post(get_blog_by_slug))
        .route("/sitemap", post(sitemap))
}
