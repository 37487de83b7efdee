use crate::utils::PageWindow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(window: &PageWindow, total_items: i64) -> Self {
        Self {
            page: window.page,
            page_size: window.limit,
            total_items,
            total_pages: window.total_pages(total_items),
        }
    }
}
