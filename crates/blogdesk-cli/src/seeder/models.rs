//! Configuration for blog seeding.

use blogdesk_models::DEFAULT_BLOG_SOURCE;

/// Categories seeded posts are spread across.
pub const SEED_CATEGORIES: [&str; 5] = ["engineering", "design", "product", "culture", "news"];

#[derive(Clone, Debug)]
pub struct BlogSeedConfig {
    pub count: usize,
    /// Source tag written on every seeded post.
    pub blog_from: String,
}

impl BlogSeedConfig {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            blog_from: DEFAULT_BLOG_SOURCE.to_string(),
        }
    }

    pub fn with_source(mut self, blog_from: impl Into<String>) -> Self {
        self.blog_from = blog_from.into();
        self
    }
}

impl Default for BlogSeedConfig {
    fn default() -> Self {
        Self::new(25)
    }
}
