use crate::utils::PageWindow;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindAllQuery {
    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default, alias = "recordPerPage")]
    pub page_size: Option<i64>,
}

fn default_page() -> i64 {
    1
}

impl Default for FindAllQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: None,
        }
    }
}

impl FindAllQuery {
    pub fn window(&self, default_size: i64) -> PageWindow {
        PageWindow::new(self.page, self.page_size, default_size)
    }
}
