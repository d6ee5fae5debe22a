//! Public, unauthenticated read endpoints for the marketing site.

pub mod controller;
pub mod router;
