//! Blog posts: the stored record, request bodies, validation and list
//! queries.

pub mod query;
pub mod validation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

use blogdesk_core::AppError;

/// Source tag given to posts that do not name one, and the only source the
/// admin listing shows.
pub const DEFAULT_BLOG_SOURCE: &str = "blogsmk";

/// An additional image attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OtherImage {
    pub path: String,
    pub description: String,
    pub alttext: String,
}

/// A blog post as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub banner_image: String,
    pub banner_alttext: String,
    pub category: String,
    pub title: String,
    pub blog_date: DateTime<Utc>,
    pub brief: String,
    pub meta_title: String,
    pub url_slug: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    pub og_type: String,
    pub og_sitename: String,
    pub meta_description: String,
    pub blog_from: String,
    #[schema(value_type = Vec<OtherImage>)]
    pub other_image: Json<Vec<OtherImage>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The validated payload of a save request, ready to insert or to replace
/// an existing row with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedBlog {
    pub banner_image: String,
    pub banner_alttext: String,
    pub category: String,
    pub title: String,
    pub blog_date: DateTime<Utc>,
    pub brief: String,
    pub meta_title: String,
    pub url_slug: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    pub og_type: String,
    pub og_sitename: String,
    pub meta_description: String,
    pub blog_from: String,
    pub other_image: Vec<OtherImage>,
}

/// Body of the admin `getone` and `remove` endpoints.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BlogIdRequest {
    #[schema(example = "0b7e7a4e-8d53-4d43-9f3b-1b1b8d1e0c11")]
    pub blogid: Option<String>,
}

impl BlogIdRequest {
    /// The id as a UUID. Absent or blank is "required", anything that is not
    /// a UUID is "invalid"; both are 400s.
    pub fn require_id(&self) -> Result<Uuid, AppError> {
        match self.blogid.as_deref().map(str::trim) {
            None | Some("") => Err(AppError::bad_request(anyhow::anyhow!("blogid is required"))),
            Some(raw) => parse_blog_id(raw),
        }
    }
}

/// Parses a client-supplied blog id.
pub fn parse_blog_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid blogid")))
}

/// Body of the landing `getone` endpoint. The slug is kept as a raw value
/// so a non-string slug can be rejected with a 400 rather than a parse
/// failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SlugRequest {
    #[schema(value_type = Option<String>, example = "my-first-post")]
    pub url_slug: Option<Value>,
}

impl SlugRequest {
    pub fn require_slug(&self) -> Result<&str, AppError> {
        match &self.url_slug {
            Some(Value::String(slug)) if !slug.is_empty() => Ok(slug),
            _ => Err(AppError::bad_request(anyhow::anyhow!("url_slug is required"))),
        }
    }
}

/// Shape of the save body, for the API docs only. Handlers read the body as
/// a raw JSON object and hand it to [`validation::validate_blog`].
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveBlogRequest {
    /// Present to update an existing post, absent to create one.
    pub blogid: Option<String>,
    #[schema(example = "/uploads/1700000000000-banner.png")]
    pub banner_image: String,
    pub banner_alttext: String,
    #[schema(example = "engineering")]
    pub category: String,
    pub title: String,
    /// `DD-MM-YYYY`
    #[schema(example = "05-03-2024")]
    pub blog_date: String,
    pub brief: String,
    pub meta_title: String,
    #[schema(example = "my-first-post")]
    pub url_slug: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    pub og_type: String,
    pub og_sitename: String,
    pub meta_description: String,
    #[schema(example = "blogsmk")]
    pub blog_from: Option<String>,
    pub other_image: Option<Vec<OtherImage>>,
}

/// Data of a successful upload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadResponse {
    #[serde(rename = "imagePath")]
    #[schema(example = "/uploads/1700000000000-banner.png")]
    pub image_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blog_id_request() {
        let missing = BlogIdRequest::default();
        assert_eq!(
            missing.require_id().unwrap_err().error.to_string(),
            "blogid is required"
        );

        let bad = BlogIdRequest {
            blogid: Some("not-a-uuid".to_string()),
        };
        assert_eq!(bad.require_id().unwrap_err().error.to_string(), "Invalid blogid");

        let id = Uuid::new_v4();
        let good = BlogIdRequest {
            blogid: Some(id.to_string()),
        };
        assert_eq!(good.require_id().unwrap(), id);
    }

    #[test]
    fn test_slug_request_requires_string() {
        let req: SlugRequest = serde_json::from_value(json!({"url_slug": 42})).unwrap();
        assert!(req.require_slug().is_err());

        let req: SlugRequest = serde_json::from_value(json!({"url_slug": ""})).unwrap();
        assert!(req.require_slug().is_err());

        let req: SlugRequest = serde_json::from_value(json!({"url_slug": "hello"})).unwrap();
        assert_eq!(req.require_slug().unwrap(), "hello");
    }

    #[test]
    fn test_blog_wire_names() {
        let now = Utc::now();
        let blog = Blog {
            id: Uuid::nil(),
            banner_image: "b".into(),
            banner_alttext: "b".into(),
            category: "c".into(),
            title: "t".into(),
            blog_date: now,
            brief: "b".into(),
            meta_title: "m".into(),
            url_slug: "s".into(),
            canonical: "c".into(),
            og_title: "o".into(),
            og_description: "o".into(),
            og_url: "o".into(),
            og_type: "o".into(),
            og_sitename: "o".into(),
            meta_description: "m".into(),
            blog_from: DEFAULT_BLOG_SOURCE.into(),
            other_image: Json(vec![]),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&blog).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["other_image"], json!([]));
    }
}
