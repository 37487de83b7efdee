use crate::{
    abstract_trait::OrderItemQueryRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{OrderItem, OrderItemDetail},
    utils::PageWindow,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;

pub struct OrderItemQueryRepository {
    db: Database,
}

impl OrderItemQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for OrderItemQueryRepository {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<OrderItem>, RepositoryError> {
        info!("📦 Fetching order items page={} size={}", window.page, window.limit);

        self.db
            .bounded(
                "find_all_order_items",
                sqlx::query_as::<_, OrderItem>(
                    r#"
                    SELECT order_item_id, quantity, unit_price, food_id, order_id,
                           created_at, updated_at
                    FROM order_items
                    ORDER BY order_item_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.probe_limit())
                .bind(window.offset)
                .fetch_all(self.db.pool()),
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderItem>, RepositoryError> {
        info!("🆔 Fetching order item id={id}");

        self.db
            .bounded(
                "find_order_item_by_id",
                sqlx::query_as::<_, OrderItem>(
                    r#"
                    SELECT order_item_id, quantity, unit_price, food_id, order_id,
                           created_at, updated_at
                    FROM order_items
                    WHERE order_item_id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(self.db.pool()),
            )
            .await
    }

    async fn find_details_by_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        info!("🧩 Joining order items for order id={order_id}");

        self.db
            .bounded(
                "find_order_item_details",
                sqlx::query_as::<_, OrderItemDetail>(
                    r#"
                    SELECT
                        oi.order_item_id,
                        oi.quantity,
                        oi.unit_price,
                        oi.food_id,
                        oi.order_id,
                        oi.created_at  AS item_created_at,
                        oi.updated_at  AS item_updated_at,
                        f.name         AS food_name,
                        f.price        AS food_price,
                        f.image        AS food_image,
                        f.menu_id      AS food_menu_id,
                        f.created_at   AS food_created_at,
                        f.updated_at   AS food_updated_at,
                        m.name         AS menu_name,
                        m.category     AS menu_category,
                        m.start_date   AS menu_start_date,
                        m.end_date     AS menu_end_date,
                        m.created_at   AS menu_created_at,
                        m.updated_at   AS menu_updated_at,
                        o.order_date,
                        o.table_id,
                        o.user_id,
                        o.created_at   AS order_created_at,
                        o.updated_at   AS order_updated_at,
                        t.number_of_guests,
                        t.table_number,
                        t.created_at   AS table_created_at,
                        t.updated_at   AS table_updated_at,
                        u.name         AS user_name,
                        u.email        AS user_email
                    FROM order_items oi
                    JOIN foods f  ON f.food_id = oi.food_id
                    JOIN menus m  ON m.menu_id = f.menu_id
                    JOIN orders o ON o.order_id = oi.order_id
                    JOIN tables t ON t.table_id = o.table_id
                    JOIN users u  ON u.user_id = o.user_id
                    WHERE oi.order_id = $1
                    ORDER BY oi.order_item_id ASC
                    "#,
                )
                .bind(order_id)
                .fetch_all(self.db.pool()),
            )
            .await
    }

    async fn total_for_order(&self, order_id: i32) -> Result<Decimal, RepositoryError> {
        self.db
            .bounded(
                "total_for_order",
                sqlx::query_scalar::<_, Decimal>(
                    r#"
                    SELECT COALESCE(SUM(quantity * unit_price), 0)
                    FROM order_items
                    WHERE order_id = $1
                    "#,
                )
                .bind(order_id)
                .fetch_one(self.db.pool()),
            )
            .await
    }
}
