use crate::{
    domain::{
        CurrentUser,
        requests::{CreateInvoiceRequest, FindAllQuery, UpdateInvoiceRequest},
        responses::{ApiResponse, ApiResponsePagination, InvoiceResponse, InvoiceViewResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInvoiceService = Arc<dyn InvoiceServiceTrait + Send + Sync>;

#[async_trait]
pub trait InvoiceServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<InvoiceResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<InvoiceViewResponse>, ServiceError>;
    async fn create_invoice(
        &self,
        actor: &CurrentUser,
        req: &CreateInvoiceRequest,
    ) -> Result<ApiResponse<InvoiceResponse>, ServiceError>;
    async fn update_invoice(
        &self,
        id: i32,
        req: &UpdateInvoiceRequest,
    ) -> Result<ApiResponse<InvoiceResponse>, ServiceError>;
}
