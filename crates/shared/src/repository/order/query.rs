use crate::{
    abstract_trait::OrderQueryRepositoryTrait, config::Database, errors::RepositoryError,
    model::Order, utils::PageWindow,
};
use async_trait::async_trait;
use tracing::info;

pub struct OrderQueryRepository {
    db: Database,
}

impl OrderQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Order>, RepositoryError> {
        info!("🧾 Fetching orders page={} size={}", window.page, window.limit);

        self.db
            .bounded(
                "find_all_orders",
                sqlx::query_as::<_, Order>(
                    r#"
                    SELECT order_id, order_date, table_id, user_id, created_at, updated_at
                    FROM orders
                    ORDER BY order_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.probe_limit())
                .bind(window.offset)
                .fetch_all(self.db.pool()),
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        info!("🆔 Fetching order id={id}");

        self.db
            .bounded(
                "find_order_by_id",
                sqlx::query_as::<_, Order>(
                    r#"
                    SELECT order_id, order_date, table_id, user_id, created_at, updated_at
                    FROM orders
                    WHERE order_id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(self.db.pool()),
            )
            .await
    }
}
