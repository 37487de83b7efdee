use crate::{
    domain::{
        CurrentUser,
        requests::{CreateFoodRequest, FindAllQuery, UpdateFoodRequest},
        responses::{ApiResponse, ApiResponseNextPage, FoodResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFoodService = Arc<dyn FoodServiceTrait + Send + Sync>;

#[async_trait]
pub trait FoodServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponseNextPage<Vec<FoodResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<FoodResponse>, ServiceError>;
    async fn create_food(
        &self,
        actor: &CurrentUser,
        req: &CreateFoodRequest,
    ) -> Result<ApiResponse<FoodResponse>, ServiceError>;
    async fn update_food(
        &self,
        id: i32,
        req: &UpdateFoodRequest,
    ) -> Result<ApiResponse<FoodResponse>, ServiceError>;
}
