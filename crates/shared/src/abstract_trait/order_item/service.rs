use crate::{
    domain::{
        CurrentUser,
        requests::{CreateOrderItemsRequest, FindAllQuery, UpdateOrderItemRequest},
        responses::{
            ApiResponse, ApiResponseNextPage, OrderItemDetailResponse, OrderItemResponse,
            OrderItemsCreatedResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderItemService = Arc<dyn OrderItemServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponseNextPage<Vec<OrderItemResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;
    async fn find_by_order(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<OrderItemDetailResponse>>, ServiceError>;
    async fn create_order_items(
        &self,
        actor: &CurrentUser,
        req: &CreateOrderItemsRequest,
    ) -> Result<ApiResponse<OrderItemsCreatedResponse>, ServiceError>;
    async fn update_order_item(
        &self,
        id: i32,
        req: &UpdateOrderItemRequest,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;
}
