use crate::{domain::requests::non_zero, model::Order};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "Table ID is required"))]
    #[schema(example = 1)]
    pub table_id: i32,

    pub order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[validate(range(min = 0))]
    pub table_id: Option<i32>,

    pub order_date: Option<DateTime<Utc>>,
}

impl UpdateOrderRequest {
    /// Returns the new table id when the order moved to another table.
    pub fn apply_to(&self, order: &mut Order) -> Option<i32> {
        if let Some(order_date) = self.order_date {
            order.order_date = order_date;
        }
        match non_zero(self.table_id) {
            Some(table_id) if table_id != order.table_id => {
                order.table_id = table_id;
                Some(table_id)
            }
            _ => None,
        }
    }
}
