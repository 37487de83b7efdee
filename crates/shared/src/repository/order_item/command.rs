use crate::{
    abstract_trait::OrderItemCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{NewOrderItem, OrderItem},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderItemCommandRepository {
    db: Database,
}

impl OrderItemCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemCommandRepositoryTrait for OrderItemCommandRepository {
    async fn create_order_items(
        &self,
        order_id: i32,
        items: &[NewOrderItem],
    ) -> Result<Vec<OrderItem>, RepositoryError> {
        info!("🆕 Inserting {} order items for order id={order_id}", items.len());

        let pool = self.db.pool();

        self.db
            .bounded("create_order_items", async move {
                let mut tx = pool.begin().await?;
                let mut created = Vec::with_capacity(items.len());

                for item in items {
                    let row = sqlx::query_as::<_, OrderItem>(
                        r#"
                        INSERT INTO order_items
                            (quantity, unit_price, food_id, order_id, created_at, updated_at)
                        VALUES ($1, $2, $3, $4, $5, $5)
                        RETURNING order_item_id, quantity, unit_price, food_id, order_id,
                                  created_at, updated_at
                        "#,
                    )
                    .bind(item.quantity)
                    .bind(item.unit_price)
                    .bind(item.food_id)
                    .bind(order_id)
                    .bind(item.created_at)
                    .fetch_one(&mut *tx)
                    .await?;

                    created.push(row);
                }

                tx.commit().await?;
                Ok::<_, sqlx::Error>(created)
            })
            .await
    }

    async fn update_order_item(&self, item: &OrderItem) -> Result<OrderItem, RepositoryError> {
        info!("✏️ Updating order item id={}", item.order_item_id);

        let updated = self
            .db
            .bounded(
                "update_order_item",
                sqlx::query_as::<_, OrderItem>(
                    r#"
                    UPDATE order_items
                    SET quantity = $2,
                        unit_price = $3,
                        food_id = $4,
                        order_id = $5,
                        updated_at = $6
                    WHERE order_item_id = $1
                    RETURNING order_item_id, quantity, unit_price, food_id, order_id,
                              created_at, updated_at
                    "#,
                )
                .bind(item.order_item_id)
                .bind(item.quantity)
                .bind(item.unit_price)
                .bind(item.food_id)
                .bind(item.order_id)
                .bind(item.updated_at)
                .fetch_optional(self.db.pool()),
            )
            .await?;

        updated.ok_or_else(|| {
            error!("❌ Order item id={} vanished before update", item.order_item_id);
            RepositoryError::NotFound
        })
    }
}
