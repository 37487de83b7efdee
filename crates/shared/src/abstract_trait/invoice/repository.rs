use crate::{
    errors::RepositoryError,
    model::{Invoice, NewInvoice},
    utils::PageWindow,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInvoiceQueryRepository = Arc<dyn InvoiceQueryRepositoryTrait + Send + Sync>;
pub type DynInvoiceCommandRepository = Arc<dyn InvoiceCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InvoiceQueryRepositoryTrait {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Invoice>, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, RepositoryError>;
}

#[async_trait]
pub trait InvoiceCommandRepositoryTrait {
    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, RepositoryError>;
    async fn update_invoice(&self, invoice: &Invoice) -> Result<Invoice, RepositoryError>;
}
