use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{NewOrder, Order},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: Database,
}

impl OrderCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        info!("🆕 Inserting order");

        self.db
            .bounded(
                "create_order",
                sqlx::query_as::<_, Order>(
                    r#"
                    INSERT INTO orders (order_date, table_id, user_id, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $4)
                    RETURNING order_id, order_date, table_id, user_id, created_at, updated_at
                    "#,
                )
                .bind(order.order_date)
                .bind(order.table_id)
                .bind(order.user_id)
                .bind(order.created_at)
                .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn update_order(&self, order: &Order) -> Result<Order, RepositoryError> {
        info!("✏️ Updating order id={}", order.order_id);

        let updated = self
            .db
            .bounded(
                "update_order",
                sqlx::query_as::<_, Order>(
                    r#"
                    UPDATE orders
                    SET order_date = $2,
                        table_id = $3,
                        user_id = $4,
                        updated_at = $5
                    WHERE order_id = $1
                    RETURNING order_id, order_date, table_id, user_id, created_at, updated_at
                    "#,
                )
                .bind(order.order_id)
                .bind(order.order_date)
                .bind(order.table_id)
                .bind(order.user_id)
                .bind(order.updated_at)
                .fetch_optional(self.db.pool()),
            )
            .await?;

        updated.ok_or_else(|| {
            error!("❌ Order id={} vanished before update", order.order_id);
            RepositoryError::NotFound
        })
    }
}
