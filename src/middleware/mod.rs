//! Request middleware and extractors.
//!
//! - [`auth`]: bearer token extraction and the `require_auth` guard used
//!   on every `/admin/blogs` route
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `require_auth` verifies the token and stores the [`auth::AuthUser`]
//!    in the request extensions
//! 3. Handlers that need the caller read it back with `Extension<AuthUser>`

pub mod auth;
