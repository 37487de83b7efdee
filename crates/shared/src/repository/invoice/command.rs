use crate::{
    abstract_trait::InvoiceCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{NewInvoice, Invoice},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct InvoiceCommandRepository {
    db: Database,
}

impl InvoiceCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceCommandRepositoryTrait for InvoiceCommandRepository {
    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, RepositoryError> {
        info!("🆕 Inserting invoice");

        self.db
            .bounded(
                "create_invoice",
                sqlx::query_as::<_, Invoice>(
                    r#"
                    INSERT INTO invoices (order_id, payment_method, payment_status, payment_due_date, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $5)
                    RETURNING invoice_id, order_id, payment_method, payment_status, payment_due_date, created_at, updated_at
                    "#,
                )
                .bind(invoice.order_id)
                .bind(invoice.payment_method.as_str())
                .bind(invoice.payment_status.as_str())
                .bind(invoice.payment_due_date)
                .bind(invoice.created_at)
                .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn update_invoice(&self, invoice: &Invoice) -> Result<Invoice, RepositoryError> {
        info!("✏️ Updating invoice id={}", invoice.invoice_id);

        let updated = self
            .db
            .bounded(
                "update_invoice",
                sqlx::query_as::<_, Invoice>(
                    r#"
                    UPDATE invoices
                    SET order_id = $2,
                        payment_method = $3,
                        payment_status = $4,
                        payment_due_date = $5,
                        updated_at = $6
                    WHERE invoice_id = $1
                    RETURNING invoice_id, order_id, payment_method, payment_status, payment_due_date, created_at, updated_at
                    "#,
                )
                .bind(invoice.invoice_id)
                .bind(invoice.order_id)
                .bind(invoice.payment_method.as_str())
                .bind(invoice.payment_status.as_str())
                .bind(invoice.payment_due_date)
                .bind(invoice.updated_at)
                .fetch_optional(self.db.pool()),
            )
            .await?;

        updated.ok_or_else(|| {
            error!("❌ Invoice id={} vanished before update", invoice.invoice_id);
            RepositoryError::NotFound
        })
    }
}
