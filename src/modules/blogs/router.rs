use crate::state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};

use super::controller::{get_blog, list_blogs, remove_blog, save_blog, upload_image};

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn init_blogs_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/list", post(list_blogs))
        .route("/getone", post(get_blog))
        .route("/save", post(save_blog))
        .route("/remove", post(remove_blog))
        .route(
            "/upload",
            post(upload_image).layer(DefaultBodyLimit::max(
                max_upload_bytes.saturating_add(MULTIPART_OVERHEAD),
            )),
        )
}
