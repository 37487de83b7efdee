use crate::{
    abstract_trait::{DynMenuCommandRepository, DynMenuQueryRepository, MenuServiceTrait},
    domain::{
        requests::{CreateMenuRequest, FindAllQuery, UpdateMenuRequest, check_date_range},
        responses::{ApiResponse, ApiResponsePagination, MenuResponse, Pagination},
    },
    errors::ServiceError,
    model::NewMenu,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 10;

pub struct MenuServiceDeps {
    pub query: DynMenuQueryRepository,
    pub command: DynMenuCommandRepository,
    pub tracer: ServiceTracer,
}

pub struct MenuService {
    query: DynMenuQueryRepository,
    command: DynMenuCommandRepository,
    tracer: ServiceTracer,
}

impl MenuService {
    pub fn new(deps: MenuServiceDeps) -> Self {
        let MenuServiceDeps {
            query,
            command,
            tracer,
        } = deps;

        Self {
            query,
            command,
            tracer,
        }
    }
}

#[async_trait]
impl MenuServiceTrait for MenuService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<MenuResponse>>, ServiceError> {
        let window = req.window(DEFAULT_PAGE_SIZE);

        self.tracer
            .observe(
                "find_all_menus",
                Method::Get,
                vec![KeyValue::new("page", window.page)],
                async {
                    let menus = self.query.find_all(&window).await?;
                    let total = self.query.count().await?;

                    Ok(ApiResponsePagination::success(
                        "Menus retrieved successfully",
                        menus.into_iter().map(MenuResponse::from).collect(),
                        Pagination::new(&window, total),
                    ))
                },
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<MenuResponse>, ServiceError> {
        self.tracer
            .observe(
                "find_menu_by_id",
                Method::Get,
                vec![KeyValue::new("menu.id", id as i64)],
                async {
                    let menu = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("menu", id))?;

                    Ok(ApiResponse::success("Menu retrieved successfully", menu.into()))
                },
            )
            .await
    }

    async fn create_menu(
        &self,
        req: &CreateMenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError> {
        info!("📋 Creating menu name={}", req.name);

        self.tracer
            .observe(
                "create_menu",
                Method::Post,
                vec![KeyValue::new("menu.name", req.name.clone())],
                async {
                    check_date_range(req.start_date, req.end_date)?;

                    let menu = self
                        .command
                        .create_menu(&NewMenu {
                            name: req.name.clone(),
                            category: req.category.clone(),
                            start_date: req.start_date,
                            end_date: req.end_date,
                            created_at: Utc::now(),
                        })
                        .await?;

                    Ok(ApiResponse::success("Menu created successfully", menu.into()))
                },
            )
            .await
    }

    async fn update_menu(
        &self,
        id: i32,
        req: &UpdateMenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError> {
        info!("✏️ Updating menu id={id}");

        self.tracer
            .observe(
                "update_menu",
                Method::Put,
                vec![KeyValue::new("menu.id", id as i64)],
                async {
                    check_date_range(req.start_date, req.end_date)?;

                    let mut menu = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("menu", id))?;

                    req.apply_to(&mut menu);
                    check_date_range(menu.start_date, menu.end_date)?;
                    menu.updated_at = Utc::now();

                    let menu = self.command.update_menu(&menu).await?;

                    Ok(ApiResponse::success("Menu updated successfully", menu.into()))
                },
            )
            .await
    }
}
