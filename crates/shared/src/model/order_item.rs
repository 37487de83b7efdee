use crate::model::{Food, Menu, Order, Table};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, postgres::PgRow};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub food_id: i32,
    pub order_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub quantity: i32,
    pub unit_price: Decimal,
    pub food_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

/// One order item joined with its food, the food's menu, and the owning
/// order's table and user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub item: OrderItem,
    pub food: Food,
    pub menu: Menu,
    pub order: Order,
    pub table: Table,
    pub user: UserSummary,
}

// Column aliases are produced by the join in the order item query repository.
impl<'r> FromRow<'r, PgRow> for OrderItemDetail {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let order_id: i32 = row.try_get("order_id")?;
        let food_id: i32 = row.try_get("food_id")?;
        let menu_id: i32 = row.try_get("food_menu_id")?;
        let table_id: i32 = row.try_get("table_id")?;
        let user_id: i32 = row.try_get("user_id")?;

        Ok(Self {
            item: OrderItem {
                order_item_id: row.try_get("order_item_id")?,
                quantity: row.try_get("quantity")?,
                unit_price: row.try_get("unit_price")?,
                food_id,
                order_id,
                created_at: row.try_get("item_created_at")?,
                updated_at: row.try_get("item_updated_at")?,
            },
            food: Food {
                food_id,
                name: row.try_get("food_name")?,
                price: row.try_get("food_price")?,
                image: row.try_get("food_image")?,
                menu_id,
                created_at: row.try_get("food_created_at")?,
                updated_at: row.try_get("food_updated_at")?,
            },
            menu: Menu {
                menu_id,
                name: row.try_get("menu_name")?,
                category: row.try_get("menu_category")?,
                start_date: row.try_get("menu_start_date")?,
                end_date: row.try_get("menu_end_date")?,
                created_at: row.try_get("menu_created_at")?,
                updated_at: row.try_get("menu_updated_at")?,
            },
            order: Order {
                order_id,
                order_date: row.try_get("order_date")?,
                table_id,
                user_id,
                created_at: row.try_get("order_created_at")?,
                updated_at: row.try_get("order_updated_at")?,
            },
            table: Table {
                table_id,
                number_of_guests: row.try_get("number_of_guests")?,
                table_number: row.try_get("table_number")?,
                created_at: row.try_get("table_created_at")?,
                updated_at: row.try_get("table_updated_at")?,
            },
            user: UserSummary {
                user_id,
                name: row.try_get("user_name")?,
                email: row.try_get("user_email")?,
            },
        })
    }
}
