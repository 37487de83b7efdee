use crate::{
    domain::responses::OrderItemDetailResponse,
    model::{Invoice, PaymentMethod, PaymentStatus},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub payment_due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(value: Invoice) -> Self {
        InvoiceResponse {
            id: value.invoice_id,
            order_id: value.order_id,
            payment_method: value.payment_method,
            payment_status: value.payment_status,
            payment_due_date: value.payment_due_date,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Invoice joined with its order's items and the freshly computed total.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceViewResponse {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub payment_due_date: DateTime<Utc>,
    pub table_number: Option<i32>,
    pub total_amount: Decimal,
    pub order_details: Vec<OrderItemDetailResponse>,
}
