mod command;
mod query;

use self::command::InvoiceCommandRepository;
use self::query::InvoiceQueryRepository;

use crate::{
    abstract_trait::{DynInvoiceCommandRepository, DynInvoiceQueryRepository},
    config::Database,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct InvoiceRepository {
    pub query: DynInvoiceQueryRepository,
    pub command: DynInvoiceCommandRepository,
}

impl InvoiceRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(InvoiceQueryRepository::new(db.clone())) as DynInvoiceQueryRepository;
        let command = Arc::new(InvoiceCommandRepository::new(db)) as DynInvoiceCommandRepository;

        Self { query, command }
    }
}
