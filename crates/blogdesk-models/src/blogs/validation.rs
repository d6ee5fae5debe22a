//! Save-payload validation.
//!
//! [`validate_blog`] checks a raw JSON object in a fixed order and reports
//! the first kind of failure it finds:
//!
//! 1. required fields (every missing one is listed)
//! 2. required fields holding arrays or objects
//! 3. `url_slug` format
//! 4. `other_image` shape
//! 5. `blog_date` format and values
//!
//! # Example
//!
//! ```
//! use blogdesk_models::blogs::validation::parse_blog_date;
//!
//! let date = parse_blog_date("05-03-2024").unwrap();
//! assert_eq!(date.to_rfc3339(), "2024-03-05T00:00:00+00:00");
//! ```

use std::fmt;

use blogdesk_core::AppError;
use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use serde_json::{Map, Value};

use super::{DEFAULT_BLOG_SOURCE, NormalizedBlog, OtherImage};

/// Fields a save body must carry, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 15] = [
    "banner_image",
    "banner_alttext",
    "category",
    "title",
    "blog_date",
    "brief",
    "meta_title",
    "url_slug",
    "canonical",
    "og_title",
    "og_description",
    "og_url",
    "og_type",
    "og_sitename",
    "meta_description",
];

/// Why a save body was rejected.
///
/// Deliberately not a `std::error::Error`: it must go through
/// [`BlogValidationError::into_app_error`] to become a 400, never through
/// the blanket conversion that yields a 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogValidationError {
    MissingFields(Vec<&'static str>),
    InvalidFieldType { field: &'static str },
    InvalidSlug,
    OtherImagesNotArray,
    IncompleteOtherImage,
    InvalidDateFormat,
    InvalidDateValues,
}

impl BlogValidationError {
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields(fields) => fields,
            _ => &[],
        }
    }

    pub fn into_app_error(self) -> AppError {
        let message = self.to_string();
        match self {
            Self::MissingFields(fields) => {
                AppError::validation(message, fields.into_iter().map(String::from).collect())
            }
            _ => AppError::bad_request(anyhow::anyhow!(message)),
        }
    }
}

impl fmt::Display for BlogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                write!(f, "Validation Failed: Missing fields - {}", fields.join(", "))
            }
            Self::InvalidFieldType { field } => {
                write!(f, "Invalid value for {field}: expected text")
            }
            Self::InvalidSlug => f.write_str(
                "Invalid URL Slug format. Only letters, numbers, hyphens, and underscores are allowed.",
            ),
            Self::OtherImagesNotArray => f.write_str("other_image must be an array"),
            Self::IncompleteOtherImage => f.write_str(
                "Each item in other_image must include path, description, and alttext",
            ),
            Self::InvalidDateFormat => f.write_str("Invalid blog_date format. Use DD-MM-YYYY"),
            Self::InvalidDateValues => {
                f.write_str("Invalid blog_date values. Provide a full DD-MM-YYYY date.")
            }
        }
    }
}

/// Validates a raw save body and returns the payload to persist.
pub fn validate_blog(raw: &Map<String, Value>) -> Result<NormalizedBlog, BlogValidationError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| raw.get(*field).is_none_or(is_blank))
        .collect();
    if !missing.is_empty() {
        return Err(BlogValidationError::MissingFields(missing));
    }

    let text = |field: &'static str| {
        raw.get(field)
            .and_then(scalar_text)
            .ok_or(BlogValidationError::InvalidFieldType { field })
    };

    let banner_image = text("banner_image")?;
    let banner_alttext = text("banner_alttext")?;
    let category = text("category")?;
    let title = text("title")?;
    let blog_date = text("blog_date")?;
    let brief = text("brief")?;
    let meta_title = text("meta_title")?;
    let url_slug = text("url_slug")?;
    let canonical = text("canonical")?;
    let og_title = text("og_title")?;
    let og_description = text("og_description")?;
    let og_url = text("og_url")?;
    let og_type = text("og_type")?;
    let og_sitename = text("og_sitename")?;
    let meta_description = text("meta_description")?;

    let blog_from = match raw.get("blog_from") {
        Some(value) if is_truthy(value) && !is_blank(value) => scalar_text(value)
            .ok_or(BlogValidationError::InvalidFieldType { field: "blog_from" })?,
        _ => DEFAULT_BLOG_SOURCE.to_string(),
    };

    if !is_valid_slug(&url_slug) {
        return Err(BlogValidationError::InvalidSlug);
    }

    let other_image = parse_other_images(raw.get("other_image"))?;
    let blog_date = parse_blog_date(&blog_date)?;

    Ok(NormalizedBlog {
        banner_image,
        banner_alttext,
        category,
        title,
        blog_date,
        brief,
        meta_title,
        url_slug,
        canonical,
        og_title,
        og_description,
        og_url,
        og_type,
        og_sitename,
        meta_description,
        blog_from,
        other_image,
    })
}

/// `^[A-Za-z0-9_-]+$`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parses `DD-MM-YYYY` into UTC midnight.
///
/// Out-of-range days and months roll over the way a calendar adder would:
/// `31-04-2024` is 1 May 2024 and month 13 is January of the next year.
/// Two-digit years are taken literally: `01-01-24` is year 24. JavaScript's
/// `Date.UTC` would map years 0 to 99 onto 1900 to 1999 instead.
pub fn parse_blog_date(input: &str) -> Result<DateTime<Utc>, BlogValidationError> {
    let parts: Vec<&str> = input.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(BlogValidationError::InvalidDateFormat);
    };

    let day = positive_component(day)?;
    let month = positive_component(month)?;
    let year = i32::try_from(positive_component(year)?)
        .map_err(|_| BlogValidationError::InvalidDateValues)?;

    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|start| start.checked_add_months(Months::new(month - 1)))
        .and_then(|date| date.checked_add_days(Days::new(u64::from(day - 1))))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or(BlogValidationError::InvalidDateValues)
}

fn positive_component(part: &str) -> Result<u32, BlogValidationError> {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return Err(BlogValidationError::InvalidDateValues);
    }

    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => {
            Ok(n as u32)
        }
        _ => Err(BlogValidationError::InvalidDateValues),
    }
}

fn parse_other_images(value: Option<&Value>) -> Result<Vec<OtherImage>, BlogValidationError> {
    let items = match value {
        None => return Ok(Vec::new()),
        Some(value) if !is_truthy(value) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(BlogValidationError::OtherImagesNotArray),
    };

    items
        .iter()
        .map(|item| {
            let entry = item
                .as_object()
                .ok_or(BlogValidationError::IncompleteOtherImage)?;
            let part = |key: &str| {
                entry
                    .get(key)
                    .filter(|v| is_truthy(v))
                    .and_then(scalar_text)
                    .ok_or(BlogValidationError::IncompleteOtherImage)
            };

            Ok(OtherImage {
                path: part("path")?,
                description: part("description")?,
                alttext: part("alttext")?,
            })
        })
        .collect()
}

/// Textual form of a scalar; `None` for arrays, objects and null.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Null, whitespace-only strings and empty arrays count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Number(_) | Value::Bool(_) | Value::Object(_) => false,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
