use crate::{
    abstract_trait::MenuQueryRepositoryTrait, config::Database, errors::RepositoryError,
    model::Menu, utils::PageWindow,
};
use async_trait::async_trait;
use tracing::info;

pub struct MenuQueryRepository {
    db: Database,
}

impl MenuQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuQueryRepositoryTrait for MenuQueryRepository {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Menu>, RepositoryError> {
        info!("📋 Fetching menus page={} size={}", window.page, window.limit);

        self.db
            .bounded(
                "find_all_menus",
                sqlx::query_as::<_, Menu>(
                    r#"
                    SELECT menu_id, name, category, start_date, end_date, created_at, updated_at
                    FROM menus
                    ORDER BY menu_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.limit)
                .bind(window.offset)
                .fetch_all(self.db.pool()),
            )
            .await
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        self.db
            .bounded(
                "count_menus",
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menus")
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Menu>, RepositoryError> {
        info!("🆔 Fetching menu id={id}");

        self.db
            .bounded(
                "find_menu_by_id",
                sqlx::query_as::<_, Menu>(
                    r#"
                    SELECT menu_id, name, category, start_date, end_date, created_at, updated_at
                    FROM menus
                    WHERE menu_id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(self.db.pool()),
            )
            .await
    }
}
