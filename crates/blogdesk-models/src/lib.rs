//! # Blogdesk Models
//!
//! Domain models and DTOs for the Blogdesk API, plus the two pure pieces of
//! blog logic every handler relies on:
//!
//! - [`blogs::validation`]: turns a raw save payload into a [`NormalizedBlog`]
//! - [`blogs::query`]: turns list parameters into a [`BlogQuery`]
//!
//! # Modules
//!
//! - [`auth`]: login request and response
//! - [`blogs`]: blog records, request bodies, validation and query building
//! - [`users`]: the admin user and credential preparation

pub mod auth;
pub mod blogs;
pub mod users;

pub use auth::{LoginRequest, LoginResponse};
pub use blogs::query::{BlogFilter, BlogListParams, BlogQuery, ListScope, SortOrder, build_query};
pub use blogs::validation::{BlogValidationError, REQUIRED_FIELDS, parse_blog_date, validate_blog};
pub use blogs::{
    Blog, BlogIdRequest, DEFAULT_BLOG_SOURCE, NormalizedBlog, OtherImage, SaveBlogRequest,
    SlugRequest, UploadResponse,
};
pub use users::{PreparedCredential, User, prepare_credential};
