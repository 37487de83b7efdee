use crate::{
    abstract_trait::InvoiceQueryRepositoryTrait, config::Database, errors::RepositoryError,
    model::Invoice, utils::PageWindow,
};
use async_trait::async_trait;
use tracing::info;

pub struct InvoiceQueryRepository {
    db: Database,
}

impl InvoiceQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceQueryRepositoryTrait for InvoiceQueryRepository {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Invoice>, RepositoryError> {
        info!("💳 Fetching invoices page={} size={}", window.page, window.limit);

        self.db
            .bounded(
                "find_all_invoices",
                sqlx::query_as::<_, Invoice>(
                    r#"
                    SELECT invoice_id, order_id, payment_method, payment_status, payment_due_date, created_at, updated_at
                    FROM invoices
                    ORDER BY invoice_id ASC
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
                "count_invoices",
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, RepositoryError> {
        info!("🆔 Fetching invoice id={id}");

        self.db
            .bounded(
                "find_invoice_by_id",
                sqlx::query_as::<_, Invoice>(
                    r#"
                    SELECT invoice_id, order_id, payment_method, payment_status, payment_due_date, created_at, updated_at
                    FROM invoices
                    WHERE invoice_id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(self.db.pool()),
            )
            .await
    }
}
