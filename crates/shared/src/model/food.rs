use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Food {
    pub food_id: i32,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub menu_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub menu_id: i32,
    pub created_at: DateTime<Utc>,
}
