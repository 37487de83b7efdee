use crate::{domain::requests::non_zero, errors::ServiceError, model::OrderItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    #[serde(default)]
    pub order_id: Option<i32>,

    #[validate(range(min = 1, message = "Food ID is required"))]
    #[schema(example = 1)]
    pub food_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,

    #[schema(value_type = f64, example = 5.0)]
    pub unit_price: Decimal,
}

/// A batch of items for one order. Items go to the first item's `orderId`;
/// without one, a new order is opened on `tableId` for the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemsRequest {
    #[serde(default)]
    pub table_id: Option<i32>,

    #[validate(length(min = 1, message = "At least one order item is required"))]
    #[validate(nested)]
    pub order_items: Vec<OrderItemInput>,
}

impl CreateOrderItemsRequest {
    pub fn target_order(&self) -> Result<Option<i32>, ServiceError> {
        let target = self
            .order_items
            .first()
            .and_then(|item| non_zero(item.order_id));

        let mismatched = self
            .order_items
            .iter()
            .filter_map(|item| non_zero(item.order_id))
            .any(|order_id| Some(order_id) != target);

        if mismatched {
            return Err(ServiceError::invalid(
                "all order items must belong to the same order",
            ));
        }

        Ok(target)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderItemRequest {
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,

    #[schema(value_type = Option<f64>)]
    pub unit_price: Option<Decimal>,

    #[validate(range(min = 0))]
    pub food_id: Option<i32>,
}

impl UpdateOrderItemRequest {
    /// Returns the new food id when the item now points at another food.
    pub fn apply_to(&self, item: &mut OrderItem) -> Option<i32> {
        if let Some(quantity) = non_zero(self.quantity) {
            item.quantity = quantity;
        }
        if let Some(unit_price) = self.unit_price.filter(|p| !p.is_zero()) {
            item.unit_price = unit_price;
        }
        match non_zero(self.food_id) {
            Some(food_id) if food_id != item.food_id => {
                item.food_id = food_id;
                Some(food_id)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(order_id: Option<i32>) -> OrderItemInput {
        OrderItemInput {
            order_id,
            food_id: 1,
            quantity: 1,
            unit_price: dec!(2.00),
        }
    }

    #[test]
    fn target_order_comes_from_first_item() {
        let pack = CreateOrderItemsRequest {
            table_id: None,
            order_items: vec![input(Some(5)), input(None)],
        };
        assert_eq!(pack.target_order().unwrap(), Some(5));
    }

    #[test]
    fn missing_or_zero_order_id_means_new_order() {
        let pack = CreateOrderItemsRequest {
            table_id: Some(2),
            order_items: vec![input(Some(0))],
        };
        assert_eq!(pack.target_order().unwrap(), None);
    }

    #[test]
    fn mixed_orders_are_rejected() {
        let pack = CreateOrderItemsRequest {
            table_id: None,
            order_items: vec![input(Some(5)), input(Some(6))],
        };
        assert!(pack.target_order().is_err());
    }
}
