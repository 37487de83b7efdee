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
    abstract_trait::DynOrderItemService,
    domain::{
        CurrentUser,
        requests::{CreateOrderItemsRequest, FindAllQuery, UpdateOrderItemRequest},
        responses::{
            ApiResponse, ApiResponseNextPage, OrderItemDetailResponse, OrderItemResponse,
            OrderItemsCreatedResponse,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/order-items",
    tag = "Order-item",
    security(("token" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "List of order items", body = ApiResponseNextPage<Vec<OrderItemResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order_items(
    Extension(service): Extension<DynOrderItemService>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/order-items/{id}",
    tag = "Order-item",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Order item ID")),
    responses(
        (status = 200, description = "Order item details", body = ApiResponse<OrderItemResponse>),
        (status = 404, description = "Order item not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}/order-items",
    tag = "Order-item",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Items of the order with food, menu, table and user", body = ApiResponse<Vec<OrderItemDetailResponse>>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_items_by_order_id(
    Extension(service): Extension<DynOrderItemService>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_order(order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/order-items",
    tag = "Order-item",
    security(("token" = [])),
    request_body = CreateOrderItemsRequest,
    responses(
        (status = 201, description = "Order items created", body = ApiResponse<OrderItemsCreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Order, table or food does not exist")
    )
)]
pub async fn create_order_items(
    Extension(service): Extension<DynOrderItemService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderItemsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order_items(&current_user, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/order-items/{id}",
    tag = "Order-item",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Order item ID")),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Order item updated", body = ApiResponse<OrderItemResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order item not found"),
        (status = 422, description = "Food does not exist"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order_item(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/order-items", get(get_order_items))
        .route("/order-items/{id}", get(get_order_item))
        .route("/orders/{id}/order-items", get(get_items_by_order_id))
        .route("/order-items", post(create_order_items))
        .route("/order-items/{id}", put(update_order_item))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_item_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
