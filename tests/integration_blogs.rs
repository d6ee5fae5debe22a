mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    admin_token, age_blog, create_test_blog, post_json, send, setup_test_app,
    setup_test_app_with_upload_limit, unique_slug, valid_blog_body,
};
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

const BOUNDARY: &str = "blogdesk-test-boundary";

fn multipart_request(token: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, file_name, content) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    name, file_name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/admin/blogs/upload")
        .header("authorization", format!("Bearer {}", token))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_routes_require_token(pool: PgPool) {
    let app = setup_test_app(pool);

    for uri in [
        "/admin/blogs/list",
        "/admin/blogs/getone",
        "/admin/blogs/save",
        "/admin/blogs/remove",
        "/admin/blogs/upload",
    ] {
        let (status, body) = post_json(&app.router, uri, json!({}), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["IsSuccess"], false);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_routes_reject_bad_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, _) = post_json(
        &app.router,
        "/admin/blogs/list",
        json!({}),
        Some("not.a.token"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_blog_lifecycle(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();
    let slug = unique_slug();

    // create
    let (status, body) = post_json(
        &app.router,
        "/admin/blogs/save",
        Value::Object(valid_blog_body(&slug)),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Message"], "Blog created successfully");
    assert_eq!(body["Data"]["url_slug"], slug.as_str());
    assert_eq!(body["Data"]["blog_from"], "blogsmk");
    assert_eq!(body["Data"]["blog_date"], "2024-03-05T00:00:00Z");
    assert_eq!(body["Data"]["other_image"], json!([]));
    let created = body["Data"].clone();
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, body) = post_json(
        &app.router,
        "/admin/blogs/getone",
        json!({"blogid": id}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"], created);

    // update replaces the stored fields and keeps the id
    let mut update = valid_blog_body(&slug);
    update.insert("blogid".into(), json!(id));
    update.insert("title".into(), json!("Renamed"));
    update.insert(
        "other_image".into(),
        json!([{"path": "/uploads/2-x.png", "description": "d", "alttext": "a"}]),
    );
    let (status, body) = post_json(
        &app.router,
        "/admin/blogs/save",
        Value::Object(update),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"], "Blog updated successfully");
    assert_eq!(body["Data"]["_id"], id.as_str());
    assert_eq!(body["Data"]["title"], "Renamed");
    assert_eq!(body["Data"]["other_image"][0]["path"], "/uploads/2-x.png");

    let (status, body) = post_json(&app.router, "/admin/blogs/list", json!({}), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["totalDocs"], 1);
    assert_eq!(body["Data"]["docs"][0]["title"], "Renamed");

    let (status, body) = post_json(
        &app.router,
        "/admin/blogs/remove",
        json!({"blogid": id}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"], "Blog removed successfully");
    assert!(body["Data"].is_null());

    let (status, body) = post_json(
        &app.router,
        "/admin/blogs/getone",
        json!({"blogid": id}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Blog not found");

    let (status, _) = post_json(
        &app.router,
        "/admin/blogs/remove",
        json!({"blogid": id}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_blank_blogid_creates(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    for blogid in [json!(""), json!(null), json!(false)] {
        let mut body = valid_blog_body(&unique_slug());
        body.insert("blogid".into(), blogid);
        let (status, _) =
            post_json(&app.router, "/admin/blogs/save", Value::Object(body), Some(&token)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_missing_fields(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let mut body = valid_blog_body(&unique_slug());
    body.remove("title");
    body.insert("brief".into(), json!("   "));

    let (status, body) =
        post_json(&app.router, "/admin/blogs/save", Value::Object(body), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Validation Failed: Missing fields - title, brief");
    assert_eq!(body["errors"], json!(["title", "brief"]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_rejects_bad_slug_and_date(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let (status, body) = post_json(
        &app.router,
        "/admin/blogs/save",
        Value::Object(valid_blog_body("has spaces")),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Message"].as_str().unwrap().starts_with("Invalid URL Slug format"));

    let mut bad_date = valid_blog_body(&unique_slug());
    bad_date.insert("blog_date".into(), json!("2024/03/05"));
    let (status, body) =
        post_json(&app.router, "/admin/blogs/save", Value::Object(bad_date), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Invalid blog_date format. Use DD-MM-YYYY");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_unknown_blog(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let mut body = valid_blog_body(&unique_slug());
    body.insert("blogid".into(), json!(Uuid::new_v4().to_string()));

    let (status, body) =
        post_json(&app.router, "/admin/blogs/save", Value::Object(body), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Blog not found for update");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_rejects_non_string_blogid(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let mut body = valid_blog_body(&unique_slug());
    body.insert("blogid".into(), json!(42));

    let (status, body) =
        post_json(&app.router, "/admin/blogs/save", Value::Object(body), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Invalid blogid");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_getone_requires_valid_blogid(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let (status, body) =
        post_json(&app.router, "/admin/blogs/getone", json!({}), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "blogid is required");

    let (status, body) = post_json(
        &app.router,
        "/admin/blogs/getone",
        json!({"blogid": "abc"}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Invalid blogid");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_list_pages_and_scopes(pool: PgPool) {
    let mut partner = valid_blog_body(&unique_slug());
    partner.insert("blog_from".into(), json!("partner"));
    create_test_blog(&pool, partner).await;

    let mut ids = Vec::new();
    for i in 0..11 {
        let mut body = valid_blog_body(&unique_slug());
        body.insert("title".into(), json!(format!("Numbered {}", i)));
        let blog = create_test_blog(&pool, body).await;
        // older posts first: i = 0 is the oldest
        age_blog(&pool, blog.id, 100 - i).await;
        ids.push(blog.id);
    }

    let app = setup_test_app(pool);
    let token = admin_token();

    let (status, body) = post_json(&app.router, "/admin/blogs/list", json!({}), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["totalDocs"], 11);
    let docs = body["Data"]["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 9);
    assert_eq!(docs[0]["_id"], ids[10].to_string());
    assert!(docs.iter().all(|doc| doc["blog_from"] == "blogsmk"));

    let (_, body) = post_json(
        &app.router,
        "/admin/blogs/list",
        json!({"page": "2", "from": "partner"}),
        Some(&token),
    )
    .await;
    let docs = body["Data"]["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1]["_id"], ids[0].to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_list_accepts_empty_body(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let request = Request::builder()
        .method("POST")
        .uri("/admin/blogs/list")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["totalDocs"], 0);
    assert_eq!(body["Data"]["docs"], json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upload_stores_and_serves_file(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let request = multipart_request(&token, &[("file", Some("my banner.png"), &b"png-bytes"[..])]);
    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"], "File uploaded successfully");

    let image_path = body["Data"]["imagePath"].as_str().unwrap().to_string();
    assert!(image_path.starts_with("/uploads/"));
    assert!(image_path.ends_with("-my_banner.png"));

    let key = image_path.trim_start_matches("/uploads/");
    assert_eq!(
        std::fs::read(app.uploads.path().join(key)).unwrap(),
        b"png-bytes"
    );

    let request = Request::builder()
        .method("GET")
        .uri(&image_path)
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upload_without_file(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = admin_token();

    let request = multipart_request(&token, &[("title", None, &b"no file here"[..])]);
    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "File not uploaded");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upload_too_large(pool: PgPool) {
    let app = setup_test_app_with_upload_limit(pool, 8);
    let token = admin_token();

    let request = multipart_request(&token, &[("file", Some("big.bin"), &[7u8; 32][..])]);
    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "File exceeds maximum size of 8 bytes");
}
