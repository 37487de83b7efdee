use crate::{
    domain::{
        requests::{CreateMenuRequest, FindAllQuery, UpdateMenuRequest},
        responses::{ApiResponse, ApiResponsePagination, MenuResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMenuService = Arc<dyn MenuServiceTrait + Send + Sync>;

#[async_trait]
pub trait MenuServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<MenuResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<MenuResponse>, ServiceError>;
    async fn create_menu(
        &self,
        req: &CreateMenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError>;
    async fn update_menu(
        &self,
        id: i32,
        req: &UpdateMenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError>;
}
