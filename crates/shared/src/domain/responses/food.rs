use crate::model::Food;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodResponse {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub menu_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Food> for FoodResponse {
    fn from(value: Food) -> Self {
        FoodResponse {
            id: value.food_id,
            name: value.name,
            price: value.price,
            image: value.image,
            menu_id: value.menu_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
