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
    abstract_trait::DynFoodService,
    domain::{
        CurrentUser,
        requests::{CreateFoodRequest, FindAllQuery, UpdateFoodRequest},
        responses::{ApiResponse, ApiResponseNextPage, FoodResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/foods",
    tag = "Food",
    security(("token" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "List of foods", body = ApiResponseNextPage<Vec<FoodResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_foods(
    Extension(service): Extension<DynFoodService>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/foods/{id}",
    tag = "Food",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Food ID")),
    responses(
        (status = 200, description = "Food details", body = ApiResponse<FoodResponse>),
        (status = 404, description = "Food not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_food(
    Extension(service): Extension<DynFoodService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/foods",
    tag = "Food",
    security(("token" = [])),
    request_body = CreateFoodRequest,
    responses(
        (status = 201, description = "Food created", body = ApiResponse<FoodResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Menu does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_food(
    Extension(service): Extension<DynFoodService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateFoodRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_food(&current_user, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/foods/{id}",
    tag = "Food",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Food ID")),
    request_body = UpdateFoodRequest,
    responses(
        (status = 200, description = "Food updated", body = ApiResponse<FoodResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Food not found"),
        (status = 422, description = "Menu does not exist"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_food(
    Extension(service): Extension<DynFoodService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateFoodRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_food(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn food_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/foods", get(get_foods))
        .route("/foods/{id}", get(get_food))
        .route("/foods", post(create_food))
        .route("/foods/{id}", put(update_food))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.food_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
