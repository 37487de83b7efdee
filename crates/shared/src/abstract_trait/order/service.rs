use crate::{
    domain::{
        CurrentUser,
        requests::{CreateOrderRequest, FindAllQuery, UpdateOrderRequest},
        responses::{ApiResponse, ApiResponseNextPage, OrderResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponseNextPage<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn create_order(
        &self,
        actor: &CurrentUser,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
