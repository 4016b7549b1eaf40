use std::fmt;

use axum::http::StatusCode;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::config::PaginationConfig;

/// Error body shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter accepted by the question endpoints.
///
/// Anything that does not parse as an integer falls back to page 1. A repeated
/// `page` key keeps its first value.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    pub page: Option<String>,
}

impl<'de> Deserialize<'de> for PageQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PageQueryVisitor;

        impl<'de> Visitor<'de> for PageQueryVisitor {
            type Value = PageQuery;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("query parameters")
            }

            fn visit_map<A>(self, mut map: A) -> Result<PageQuery, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut page = None;
                while let Some(key) = map.next_key::<String>()? {
                    let value = map.next_value::<String>()?;
                    if key == "page" && page.is_none() {
                        page = Some(value);
                    }
                }
                Ok(PageQuery { page })
            }
        }

        deserializer.deserialize_map(PageQueryVisitor)
    }
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }

    pub fn with_config(&self, config: PaginationConfig) -> Pagination {
        Pagination::new(self.page(), config.questions_per_page)
    }
}

/// A 1-based page over an ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    per_page: usize,
}

impl Pagination {
    pub fn new(page: i64, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Offset of the first item, or `None` for pages below 1
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|p| p.checked_mul(self.per_page))
    }

    /// Slice `items` down to this page. Pages past the end come back empty.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.offset() {
            Some(offset) => items.into_iter().skip(offset).take(self.per_page).collect(),
            None => Vec::new(),
        }
    }
}

// =============================================================================
// LENIENT INTEGERS
// =============================================================================

/// Clients send ids both as JSON numbers and as numeric strings ("4")
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i32<E: serde::de::Error>(self) -> Result<i32, E> {
        match self {
            IntOrString::Int(n) => {
                i32::try_from(n).map_err(|_| E::custom(format!("integer {} out of range", n)))
            }
            IntOrString::Str(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| E::custom(format!("'{}' is not an integer", s))),
        }
    }
}

pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i32()
}

pub fn deserialize_optional_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i32)
        .transpose()
}
