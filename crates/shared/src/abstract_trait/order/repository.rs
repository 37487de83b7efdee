use crate::{
    errors::RepositoryError,
    model::{NewOrder, Order},
    utils::PageWindow,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Fetches up to `window.probe_limit()` rows so callers can detect a next page.
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, RepositoryError>;
    async fn update_order(&self, order: &Order) -> Result<Order, RepositoryError>;
}
