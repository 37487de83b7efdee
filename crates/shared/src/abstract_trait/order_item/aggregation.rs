use crate::{
    domain::responses::InvoiceViewResponse,
    errors::ServiceError,
    model::{Invoice, OrderItemDetail},
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynOrderAggregation = Arc<dyn OrderAggregationTrait + Send + Sync>;

#[async_trait]
pub trait OrderAggregationTrait {
    /// Fails with `NotFound` for an unknown order; an order without items
    /// yields an empty list.
    async fn items_by_order(&self, order_id: i32) -> Result<Vec<OrderItemDetail>, ServiceError>;
    async fn compute_order_total(&self, order_id: i32) -> Result<Decimal, ServiceError>;
    async fn invoice_view(&self, invoice: Invoice) -> Result<InvoiceViewResponse, ServiceError>;
}
