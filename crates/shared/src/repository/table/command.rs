use crate::{
    abstract_trait::TableCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{NewTable, Table},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct TableCommandRepository {
    db: Database,
}

impl TableCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TableCommandRepositoryTrait for TableCommandRepository {
    async fn create_table(&self, table: &NewTable) -> Result<Table, RepositoryError> {
        info!("🆕 Inserting table");

        self.db
            .bounded(
                "create_table",
                sqlx::query_as::<_, Table>(
                    r#"
                    INSERT INTO tables (number_of_guests, table_number, created_at, updated_at)
                    VALUES ($1, $2, $3, $3)
                    RETURNING table_id, number_of_guests, table_number, created_at, updated_at
                    "#,
                )
                .bind(table.number_of_guests)
                .bind(table.table_number)
                .bind(table.created_at)
                .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn update_table(&self, table: &Table) -> Result<Table, RepositoryError> {
        info!("✏️ Updating table id={}", table.table_id);

        let updated = self
            .db
            .bounded(
                "update_table",
                sqlx::query_as::<_, Table>(
                    r#"
                    UPDATE tables
                    SET number_of_guests = $2,
                        table_number = $3,
                        updated_at = $4
                    WHERE table_id = $1
                    RETURNING table_id, number_of_guests, table_number, created_at, updated_at
                    "#,
                )
                .bind(table.table_id)
                .bind(table.number_of_guests)
                .bind(table.table_number)
                .bind(table.updated_at)
                .fetch_optional(self.db.pool()),
            )
            .await?;

        updated.ok_or_else(|| {
            error!("❌ Table id={} vanished before update", table.table_id);
            RepositoryError::NotFound
        })
    }
}
