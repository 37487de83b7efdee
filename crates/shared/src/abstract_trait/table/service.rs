use crate::{
    domain::{
        CurrentUser,
        requests::{CreateTableRequest, FindAllQuery, UpdateTableRequest},
        responses::{ApiResponse, ApiResponsePagination, TableResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTableService = Arc<dyn TableServiceTrait + Send + Sync>;

#[async_trait]
pub trait TableServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<TableResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<TableResponse>, ServiceError>;
    async fn create_table(
        &self,
        actor: &CurrentUser,
        req: &CreateTableRequest,
    ) -> Result<ApiResponse<TableResponse>, ServiceError>;
    async fn update_table(
        &self,
        id: i32,
        req: &UpdateTableRequest,
    ) -> Result<ApiResponse<TableResponse>, ServiceError>;
}
