use crate::{
    abstract_trait::{
        DynFoodCommandRepository, DynFoodQueryRepository, DynMenuQueryRepository,
        FoodServiceTrait,
    },
    domain::{
        CurrentUser,
        requests::{CreateFoodRequest, FindAllQuery, UpdateFoodRequest},
        responses::{ApiResponse, ApiResponseNextPage, FoodResponse},
    },
    errors::ServiceError,
    model::NewFood,
    utils::{Method, ServiceTracer, ensure_positive_amount},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 20;

pub struct FoodServiceDeps {
    pub query: DynFoodQueryRepository,
    pub command: DynFoodCommandRepository,
    pub menu_query: DynMenuQueryRepository,
    pub tracer: ServiceTracer,
}

pub struct FoodService {
    query: DynFoodQueryRepository,
    command: DynFoodCommandRepository,
    menu_query: DynMenuQueryRepository,
    tracer: ServiceTracer,
}

impl FoodService {
    pub fn new(deps: FoodServiceDeps) -> Self {
        let FoodServiceDeps {
            query,
            command,
            menu_query,
            tracer,
        } = deps;

        Self {
            query,
            command,
            menu_query,
            tracer,
        }
    }

    async fn ensure_menu_exists(&self, menu_id: i32) -> Result<(), ServiceError> {
        match self.menu_query.find_by_id(menu_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::missing_reference("menu", menu_id)),
        }
    }
}

#[async_trait]
impl FoodServiceTrait for FoodService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponseNextPage<Vec<FoodResponse>>, ServiceError> {
        let window = req.window(DEFAULT_PAGE_SIZE);

        self.tracer
            .observe(
                "find_all_foods",
                Method::Get,
                vec![KeyValue::new("page", window.page)],
                async {
                    let rows = self.query.find_all(&window).await?;
                    let (foods, next_page) = window.split_next_page(rows);

                    Ok(ApiResponseNextPage::success(
                        "Foods retrieved successfully",
                        foods.into_iter().map(FoodResponse::from).collect(),
                        window.page,
                        next_page,
                    ))
                },
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<FoodResponse>, ServiceError> {
        self.tracer
            .observe(
                "find_food_by_id",
                Method::Get,
                vec![KeyValue::new("food.id", id as i64)],
                async {
                    let food = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("food", id))?;

                    Ok(ApiResponse::success("Food retrieved successfully", food.into()))
                },
            )
            .await
    }

    async fn create_food(
        &self,
        actor: &CurrentUser,
        req: &CreateFoodRequest,
    ) -> Result<ApiResponse<FoodResponse>, ServiceError> {
        info!("🍕 Creating food name={} menu={}", req.name, req.menu_id);

        self.tracer
            .observe(
                "create_food",
                Method::Post,
                vec![
                    KeyValue::new("food.name", req.name.clone()),
                    KeyValue::new("menu.id", req.menu_id as i64),
                ],
                async {
                    actor.require_admin("create food")?;
                    self.ensure_menu_exists(req.menu_id).await?;

                    let price = ensure_positive_amount("price", req.price)?;

                    let food = self
                        .command
                        .create_food(&NewFood {
                            name: req.name.clone(),
                            price,
                            image: req.image.clone(),
                            menu_id: req.menu_id,
                            created_at: Utc::now(),
                        })
                        .await?;

                    Ok(ApiResponse::success("Food created successfully", food.into()))
                },
            )
            .await
    }

    async fn update_food(
        &self,
        id: i32,
        req: &UpdateFoodRequest,
    ) -> Result<ApiResponse<FoodResponse>, ServiceError> {
        info!("✏️ Updating food id={id}");

        self.tracer
            .observe(
                "update_food",
                Method::Put,
                vec![KeyValue::new("food.id", id as i64)],
                async {
                    let mut food = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("food", id))?;

                    if let Some(menu_id) = req.apply_to(&mut food) {
                        self.ensure_menu_exists(menu_id).await?;
                    }

                    food.price = ensure_positive_amount("price", food.price)?;
                    food.updated_at = Utc::now();

                    let food = self.command.update_food(&food).await?;

                    Ok(ApiResponse::success("Food updated successfully", food.into()))
                },
            )
            .await
    }
}
