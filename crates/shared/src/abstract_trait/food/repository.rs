use crate::{
    errors::RepositoryError,
    model::{NewFood, Food},
    utils::PageWindow,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFoodQueryRepository = Arc<dyn FoodQueryRepositoryTrait + Send + Sync>;
pub type DynFoodCommandRepository = Arc<dyn FoodCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FoodQueryRepositoryTrait {
    /// Fetches up to `window.probe_limit()` rows so callers can detect a next page.
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Food>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Food>, RepositoryError>;
}

#[async_trait]
pub trait FoodCommandRepositoryTrait {
    async fn create_food(&self, food: &NewFood) -> Result<Food, RepositoryError>;
    async fn update_food(&self, food: &Food) -> Result<Food, RepositoryError>;
}
