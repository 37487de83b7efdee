use crate::{
    abstract_trait::TableQueryRepositoryTrait, config::Database, errors::RepositoryError,
    model::Table, utils::PageWindow,
};
use async_trait::async_trait;
use tracing::info;

pub struct TableQueryRepository {
    db: Database,
}

impl TableQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TableQueryRepositoryTrait for TableQueryRepository {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Table>, RepositoryError> {
        info!("🪑 Fetching tables page={} size={}", window.page, window.limit);

        self.db
            .bounded(
                "find_all_tables",
                sqlx::query_as::<_, Table>(
                    r#"
                    SELECT table_id, number_of_guests, table_number, created_at, updated_at
                    FROM tables
                    ORDER BY table_id ASC
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
                "count_tables",
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tables")
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Table>, RepositoryError> {
        info!("🆔 Fetching table id={id}");

        self.db
            .bounded(
                "find_table_by_id",
                sqlx::query_as::<_, Table>(
                    r#"
                    SELECT table_id, number_of_guests, table_number, created_at, updated_at
                    FROM tables
                    WHERE table_id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(self.db.pool()),
            )
            .await
    }
}
