use crate::{
    errors::RepositoryError,
    model::{NewOrderItem, OrderItem, OrderItemDetail},
    utils::PageWindow,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynOrderItemQueryRepository = Arc<dyn OrderItemQueryRepositoryTrait + Send + Sync>;
pub type DynOrderItemCommandRepository = Arc<dyn OrderItemCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemQueryRepositoryTrait {
    /// Fetches up to `window.probe_limit()` rows so callers can detect a next page.
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderItem>, RepositoryError>;
    /// Items of one order joined with food, menu, table and user, ascending by item id.
    async fn find_details_by_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderItemDetail>, RepositoryError>;
    /// Sum of quantity × unit price over the order's items; zero when it has none.
    async fn total_for_order(&self, order_id: i32) -> Result<Decimal, RepositoryError>;
}

#[async_trait]
pub trait OrderItemCommandRepositoryTrait {
    /// Inserts every item for `order_id` atomically.
    async fn create_order_items(
        &self,
        order_id: i32,
        items: &[NewOrderItem],
    ) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn update_order_item(&self, item: &OrderItem) -> Result<OrderItem, RepositoryError>;
}
