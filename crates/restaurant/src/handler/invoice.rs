use crate::{
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::DynInvoiceService,
    domain::{
        CurrentUser,
        requests::{CreateInvoiceRequest, FindAllQuery, UpdateInvoiceRequest},
        responses::{ApiResponse, ApiResponsePagination, InvoiceResponse, InvoiceViewResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/invoices",
    tag = "Invoice",
    security(("token" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "List of invoices", body = ApiResponsePagination<Vec<InvoiceResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_invoices(
    Extension(service): Extension<DynInvoiceService>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/invoices/{id}",
    tag = "Invoice",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice details", body = ApiResponse<InvoiceViewResponse>),
        (status = 404, description = "Invoice not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_invoice(
    Extension(service): Extension<DynInvoiceService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/invoices",
    tag = "Invoice",
    security(("token" = [])),
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice created", body = ApiResponse<InvoiceResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Order does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_invoice(
    Extension(service): Extension<DynInvoiceService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_invoice(&current_user, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/invoices/{id}",
    tag = "Invoice",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Invoice ID")),
    request_body = UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice updated", body = ApiResponse<InvoiceResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Invoice not found"),
        (status = 422, description = "Order does not exist"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_invoice(
    Extension(service): Extension<DynInvoiceService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_invoice(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn invoice_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/invoices", get(get_invoices))
        .route("/invoices/{id}", get(get_invoice))
        .route("/invoices", post(create_invoice))
        .route("/invoices/{id}", put(update_invoice))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.invoice_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
