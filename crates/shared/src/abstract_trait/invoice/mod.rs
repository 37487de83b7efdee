mod repository;
mod service;

pub use self::repository::{
    DynInvoiceCommandRepository, DynInvoiceQueryRepository, InvoiceCommandRepositoryTrait,
    InvoiceQueryRepositoryTrait,
};
pub use self::service::{DynInvoiceService, InvoiceServiceTrait};
