use crate::{
    abstract_trait::{
        DynInvoiceCommandRepository, DynInvoiceQueryRepository, DynOrderAggregation,
        DynOrderQueryRepository, InvoiceServiceTrait,
    },
    domain::{
        CurrentUser,
        requests::{CreateInvoiceRequest, FindAllQuery, UpdateInvoiceRequest},
        responses::{
            ApiResponse, ApiResponsePagination, InvoiceResponse, InvoiceViewResponse, Pagination,
        },
    },
    errors::ServiceError,
    model::NewInvoice,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use opentelemetry::KeyValue;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 10;

pub struct InvoiceServiceDeps {
    pub query: DynInvoiceQueryRepository,
    pub command: DynInvoiceCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub aggregation: DynOrderAggregation,
    pub tracer: ServiceTracer,
}

pub struct InvoiceService {
    query: DynInvoiceQueryRepository,
    command: DynInvoiceCommandRepository,
    order_query: DynOrderQueryRepository,
    aggregation: DynOrderAggregation,
    tracer: ServiceTracer,
}

impl InvoiceService {
    pub fn new(deps: InvoiceServiceDeps) -> Self {
        let InvoiceServiceDeps {
            query,
            command,
            order_query,
            aggregation,
            tracer,
        } = deps;

        Self {
            query,
            command,
            order_query,
            aggregation,
            tracer,
        }
    }
}

#[async_trait]
impl InvoiceServiceTrait for InvoiceService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<InvoiceResponse>>, ServiceError> {
        let window = req.window(DEFAULT_PAGE_SIZE);

        self.tracer
            .observe(
                "find_all_invoices",
                Method::Get,
                vec![KeyValue::new("page", window.page)],
                async {
                    let invoices = self.query.find_all(&window).await?;
                    let total = self.query.count().await?;

                    Ok(ApiResponsePagination::success(
                        "Invoices retrieved successfully",
                        invoices.into_iter().map(InvoiceResponse::from).collect(),
                        Pagination::new(&window, total),
                    ))
                },
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<InvoiceViewResponse>, ServiceError> {
        self.tracer
            .observe(
                "find_invoice_by_id",
                Method::Get,
                vec![KeyValue::new("invoice.id", id as i64)],
                async {
                    let invoice = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("invoice", id))?;

                    let view = self.aggregation.invoice_view(invoice).await?;

                    Ok(ApiResponse::success("Invoice retrieved successfully", view))
                },
            )
            .await
    }

    async fn create_invoice(
        &self,
        actor: &CurrentUser,
        req: &CreateInvoiceRequest,
    ) -> Result<ApiResponse<InvoiceResponse>, ServiceError> {
        info!(
            "💳 Creating invoice for order id={} method={}",
            req.order_id, req.payment_method
        );

        self.tracer
            .observe(
                "create_invoice",
                Method::Post,
                vec![
                    KeyValue::new("order.id", req.order_id as i64),
                    KeyValue::new("payment.method", req.payment_method.as_str()),
                ],
                async {
                    actor.require_admin("create invoices")?;

                    if self.order_query.find_by_id(req.order_id).await?.is_none() {
                        return Err(ServiceError::missing_reference("order", req.order_id));
                    }

                    let now = Utc::now();
                    let invoice = self
                        .command
                        .create_invoice(&NewInvoice {
                            order_id: req.order_id,
                            payment_method: req.payment_method,
                            payment_status: req.payment_status.unwrap_or_default(),
                            payment_due_date: now + Duration::days(1),
                            created_at: now,
                        })
                        .await?;

                    Ok(ApiResponse::success(
                        "Invoice created successfully",
                        invoice.into(),
                    ))
                },
            )
            .await
    }

    async fn update_invoice(
        &self,
        id: i32,
        req: &UpdateInvoiceRequest,
    ) -> Result<ApiResponse<InvoiceResponse>, ServiceError> {
        info!("✏️ Updating invoice id={id}");

        self.tracer
            .observe(
                "update_invoice",
                Method::Put,
                vec![KeyValue::new("invoice.id", id as i64)],
                async {
                    let mut invoice = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("invoice", id))?;

                    req.apply_to(&mut invoice);
                    invoice.updated_at = Utc::now();

                    let invoice = self.command.update_invoice(&invoice).await?;

                    Ok(ApiResponse::success(
                        "Invoice updated successfully",
                        invoice.into(),
                    ))
                },
            )
            .await
    }
}
