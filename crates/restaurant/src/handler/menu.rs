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
    abstract_trait::DynMenuService,
    domain::{
        requests::{CreateMenuRequest, FindAllQuery, UpdateMenuRequest},
        responses::{ApiResponse, ApiResponsePagination, MenuResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/menus",
    tag = "Menu",
    security(("token" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "List of menus", body = ApiResponsePagination<Vec<MenuResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_menus(
    Extension(service): Extension<DynMenuService>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/menus/{id}",
    tag = "Menu",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Menu ID")),
    responses(
        (status = 200, description = "Menu details", body = ApiResponse<MenuResponse>),
        (status = 404, description = "Menu not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_menu(
    Extension(service): Extension<DynMenuService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/menus",
    tag = "Menu",
    security(("token" = [])),
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Menu created", body = ApiResponse<MenuResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_menu(
    Extension(service): Extension<DynMenuService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateMenuRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_menu(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/menus/{id}",
    tag = "Menu",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Menu ID")),
    request_body = UpdateMenuRequest,
    responses(
        (status = 200, description = "Menu updated", body = ApiResponse<MenuResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Menu not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_menu(
    Extension(service): Extension<DynMenuService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateMenuRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_menu(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn menu_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/menus", get(get_menus))
        .route("/menus/{id}", get(get_menu))
        .route("/menus", post(create_menu))
        .route("/menus/{id}", put(update_menu))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.menu_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
