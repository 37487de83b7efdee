use crate::{
    domain::responses::{MenuResponse, TableResponse},
    model::{OrderItem, OrderItemDetail, UserSummary},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub food_id: i32,
    pub order_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
            food_id: value.food_id,
            order_id: value.order_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemsCreatedResponse {
    pub order_id: i32,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetailResponse {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub menu: MenuResponse,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderUserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserSummary> for OrderUserResponse {
    fn from(value: UserSummary) -> Self {
        OrderUserResponse {
            id: value.user_id,
            name: value.name,
            email: value.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderContextResponse {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub table: TableResponse,
    pub user: OrderUserResponse,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetailResponse {
    pub id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
    pub created_at: DateTime<Utc>,
    pub food: FoodDetailResponse,
    pub order: OrderContextResponse,
}

impl From<OrderItemDetail> for OrderItemDetailResponse {
    fn from(value: OrderItemDetail) -> Self {
        let line_total = value.item.line_total();
        OrderItemDetailResponse {
            id: value.item.order_item_id,
            quantity: value.item.quantity,
            unit_price: value.item.unit_price,
            line_total,
            created_at: value.item.created_at,
            food: FoodDetailResponse {
                id: value.food.food_id,
                name: value.food.name,
                price: value.food.price,
                image: value.food.image,
                menu: value.menu.into(),
            },
            order: OrderContextResponse {
                id: value.order.order_id,
                order_date: value.order.order_date,
                table: value.table.into(),
                user: value.user.into(),
            },
        }
    }
}
