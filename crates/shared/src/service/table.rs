use crate::{
    abstract_trait::{DynTableCommandRepository, DynTableQueryRepository, TableServiceTrait},
    domain::{
        CurrentUser,
        requests::{CreateTableRequest, FindAllQuery, UpdateTableRequest},
        responses::{ApiResponse, ApiResponsePagination, Pagination, TableResponse},
    },
    errors::ServiceError,
    model::NewTable,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 10;

pub struct TableServiceDeps {
    pub query: DynTableQueryRepository,
    pub command: DynTableCommandRepository,
    pub tracer: ServiceTracer,
}

pub struct TableService {
    query: DynTableQueryRepository,
    command: DynTableCommandRepository,
    tracer: ServiceTracer,
}

impl TableService {
    pub fn new(deps: TableServiceDeps) -> Self {
        let TableServiceDeps {
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
impl TableServiceTrait for TableService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<TableResponse>>, ServiceError> {
        let window = req.window(DEFAULT_PAGE_SIZE);

        self.tracer
            .observe(
                "find_all_tables",
                Method::Get,
                vec![KeyValue::new("page", window.page)],
                async {
                    let tables = self.query.find_all(&window).await?;
                    let total = self.query.count().await?;

                    Ok(ApiResponsePagination::success(
                        "Tables retrieved successfully",
                        tables.into_iter().map(TableResponse::from).collect(),
                        Pagination::new(&window, total),
                    ))
                },
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<TableResponse>, ServiceError> {
        self.tracer
            .observe(
                "find_table_by_id",
                Method::Get,
                vec![KeyValue::new("table.id", id as i64)],
                async {
                    let table = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("table", id))?;

                    Ok(ApiResponse::success("Table retrieved successfully", table.into()))
                },
            )
            .await
    }

    async fn create_table(
        &self,
        actor: &CurrentUser,
        req: &CreateTableRequest,
    ) -> Result<ApiResponse<TableResponse>, ServiceError> {
        info!("🪑 Creating table number={}", req.table_number);

        self.tracer
            .observe(
                "create_table",
                Method::Post,
                vec![KeyValue::new("table.number", req.table_number as i64)],
                async {
                    actor.require_admin("create tables")?;

                    let table = self
                        .command
                        .create_table(&NewTable {
                            number_of_guests: req.number_of_guests,
                            table_number: req.table_number,
                            created_at: Utc::now(),
                        })
                        .await?;

                    Ok(ApiResponse::success("Table created successfully", table.into()))
                },
            )
            .await
    }

    async fn update_table(
        &self,
        id: i32,
        req: &UpdateTableRequest,
    ) -> Result<ApiResponse<TableResponse>, ServiceError> {
        info!("✏️ Updating table id={id}");

        self.tracer
            .observe(
                "update_table",
                Method::Put,
                vec![KeyValue::new("table.id", id as i64)],
                async {
                    let mut table = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("table", id))?;

                    req.apply_to(&mut table);
                    table.updated_at = Utc::now();

                    let table = self.command.update_table(&table).await?;

                    Ok(ApiResponse::success("Table updated successfully", table.into()))
                },
            )
            .await
    }
}
