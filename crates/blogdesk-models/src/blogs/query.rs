//! List-query construction.
//!
//! The three list endpoints share one parameter shape and differ only in
//! their defaults; [`build_query`] folds the parameters and a [`ListScope`]
//! into a [`BlogQuery`] that the service layer translates into SQL.

use blogdesk_core::PageWindow;
use blogdesk_core::serde_ext::{deserialize_loose_i64, deserialize_optional_trimmed};
use serde::Deserialize;
use utoipa::ToSchema;

use super::DEFAULT_BLOG_SOURCE;

/// Body of the list endpoints. Every field is optional and numbers may be
/// sent as strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BlogListParams {
    #[serde(default, deserialize_with = "deserialize_loose_i64")]
    #[schema(value_type = Option<i64>, example = 1)]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_loose_i64")]
    #[schema(value_type = Option<i64>, example = 9)]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub category: Option<String>,
    /// Case-insensitive title substring.
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub search: Option<String>,
    /// Older name for `search`; `search` wins when both are sent.
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub title: Option<String>,
    /// Source tag. Ignored by the admin listing.
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub from: Option<String>,
    /// Older name for `from`; `from` wins when both are sent.
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// Admin dashboard: pages of 9, own posts only.
    Admin,
    /// Public listing: pages of 10, optional source filter.
    Landing,
    /// Public full listing: unpaged unless a positive limit is given.
    All,
}

impl ListScope {
    pub fn default_limit(self) -> Option<i64> {
        match self {
            ListScope::Admin => Some(9),
            ListScope::Landing => Some(10),
            ListScope::All => None,
        }
    }
}

/// Conditions a listed post must meet. All present conditions are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// Exact category.
    pub category: Option<String>,
    /// Case-insensitive substring of the title.
    pub title_contains: Option<String>,
    /// Exact source tag.
    pub source: Option<String>,
}

impl BlogFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.title_contains.is_none() && self.source.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    CreatedAtDesc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogQuery {
    pub filter: BlogFilter,
    pub sort: SortOrder,
    pub window: PageWindow,
}

pub fn build_query(params: &BlogListParams, scope: ListScope) -> BlogQuery {
    let source = match scope {
        ListScope::Admin => Some(DEFAULT_BLOG_SOURCE.to_string()),
        ListScope::Landing | ListScope::All => {
            non_empty(&params.from).or_else(|| non_empty(&params.source))
        }
    };

    let filter = BlogFilter {
        category: non_empty(&params.category),
        title_contains: non_empty(&params.search).or_else(|| non_empty(&params.title)),
        source,
    };

    let window = match scope.default_limit() {
        Some(default_limit) => PageWindow::from_page(params.page, params.limit, default_limit),
        None => PageWindow::optional(params.page, params.limit),
    };

    BlogQuery {
        filter,
        sort: SortOrder::CreatedAtDesc,
        window,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
