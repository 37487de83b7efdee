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
    abstract_trait::DynTableService,
    domain::{
        CurrentUser,
        requests::{CreateTableRequest, FindAllQuery, UpdateTableRequest},
        responses::{ApiResponse, ApiResponsePagination, TableResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/tables",
    tag = "Table",
    security(("token" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "List of tables", body = ApiResponsePagination<Vec<TableResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_tables(
    Extension(service): Extension<DynTableService>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/tables/{id}",
    tag = "Table",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Table details", body = ApiResponse<TableResponse>),
        (status = 404, description = "Table not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_table(
    Extension(service): Extension<DynTableService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/tables",
    tag = "Table",
    security(("token" = [])),
    request_body = CreateTableRequest,
    responses(
        (status = 201, description = "Table created", body = ApiResponse<TableResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_table(
    Extension(service): Extension<DynTableService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateTableRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_table(&current_user, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/tables/{id}",
    tag = "Table",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Table ID")),
    request_body = UpdateTableRequest,
    responses(
        (status = 200, description = "Table updated", body = ApiResponse<TableResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Table not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_table(
    Extension(service): Extension<DynTableService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateTableRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_table(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn table_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/tables", get(get_tables))
        .route("/tables/{id}", get(get_table))
        .route("/tables", post(create_table))
        .route("/tables/{id}", put(update_table))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.table_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
