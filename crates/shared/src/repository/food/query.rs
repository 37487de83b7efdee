use crate::{
    abstract_trait::FoodQueryRepositoryTrait, config::Database, errors::RepositoryError,
    model::Food, utils::PageWindow,
};
use async_trait::async_trait;
use tracing::info;

pub struct FoodQueryRepository {
    db: Database,
}

impl FoodQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodQueryRepositoryTrait for FoodQueryRepository {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Food>, RepositoryError> {
        info!("🍽️ Fetching foods page={} size={}", window.page, window.limit);

        self.db
            .bounded(
                "find_all_foods",
                sqlx::query_as::<_, Food>(
                    r#"
                    SELECT food_id, name, price, image, menu_id, created_at, updated_at
                    FROM foods
                    ORDER BY food_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.probe_limit())
                .bind(window.offset)
                .fetch_all(self.db.pool()),
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Food>, RepositoryError> {
        info!("🆔 Fetching food id={id}");

        self.db
            .bounded(
                "find_food_by_id",
                sqlx::query_as::<_, Food>(
                    r#"
                    SELECT food_id, name, price, image, menu_id, created_at, updated_at
                    FROM foods
                    WHERE food_id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(self.db.pool()),
            )
            .await
    }
}
