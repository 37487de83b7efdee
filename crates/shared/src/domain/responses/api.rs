use crate::domain::responses::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }
}

/// Listing with a known total.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponsePagination<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub pagination: Pagination,
}

impl<T> ApiResponsePagination<T> {
    pub fn success(message: impl Into<String>, data: T, pagination: Pagination) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
            pagination,
        }
    }
}

/// Listing produced by over-fetching one row; only says whether another page
/// exists.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseNextPage<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub page: i64,
    pub next_page: bool,
}

impl<T> ApiResponseNextPage<T> {
    pub fn success(message: impl Into<String>, data: T, page: i64, next_page: bool) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
            page,
            next_page,
        }
    }
}
