use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynTableQueryRepository,
        OrderServiceTrait,
    },
    domain::{
        CurrentUser,
        requests::{CreateOrderRequest, FindAllQuery, UpdateOrderRequest},
        responses::{ApiResponse, ApiResponseNextPage, OrderResponse},
    },
    errors::ServiceError,
    model::{NewOrder, Order},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use opentelemetry::KeyValue;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 20;

pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub table_query: DynTableQueryRepository,
    pub tracer: ServiceTracer,
}

pub struct OrderService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    table_query: DynTableQueryRepository,
    tracer: ServiceTracer,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            query,
            command,
            table_query,
            tracer,
        } = deps;

        Self {
            query,
            command,
            table_query,
            tracer,
        }
    }
}

async fn ensure_table_exists(
    table_query: &DynTableQueryRepository,
    table_id: i32,
) -> Result<(), ServiceError> {
    match table_query.find_by_id(table_id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::missing_reference("table", table_id)),
    }
}

/// Opens an order on `table_id` for `actor`. The order item pack uses this
/// too when no existing order is referenced.
pub(crate) async fn open_order(
    table_query: &DynTableQueryRepository,
    command: &DynOrderCommandRepository,
    actor: &CurrentUser,
    table_id: i32,
    order_date: Option<DateTime<Utc>>,
) -> Result<Order, ServiceError> {
    ensure_table_exists(table_query, table_id).await?;

    let now = Utc::now();
    let order = command
        .create_order(&NewOrder {
            order_date: order_date.unwrap_or(now),
            table_id,
            user_id: actor.user_id,
            created_at: now,
        })
        .await?;

    info!(
        "🧾 Opened order id={} on table id={} for user id={}",
        order.order_id, table_id, actor.user_id
    );

    Ok(order)
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponseNextPage<Vec<OrderResponse>>, ServiceError> {
        let window = req.window(DEFAULT_PAGE_SIZE);

        self.tracer
            .observe(
                "find_all_orders",
                Method::Get,
                vec![KeyValue::new("page", window.page)],
                async {
                    let rows = self.query.find_all(&window).await?;
                    let (orders, next_page) = window.split_next_page(rows);

                    Ok(ApiResponseNextPage::success(
                        "Orders retrieved successfully",
                        orders.into_iter().map(OrderResponse::from).collect(),
                        window.page,
                        next_page,
                    ))
                },
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.tracer
            .observe(
                "find_order_by_id",
                Method::Get,
                vec![KeyValue::new("order.id", id as i64)],
                async {
                    let order = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("order", id))?;

                    Ok(ApiResponse::success("Order retrieved successfully", order.into()))
                },
            )
            .await
    }

    async fn create_order(
        &self,
        actor: &CurrentUser,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.tracer
            .observe(
                "create_order",
                Method::Post,
                vec![
                    KeyValue::new("table.id", req.table_id as i64),
                    KeyValue::new("user.id", actor.user_id as i64),
                ],
                async {
                    let order = open_order(
                        &self.table_query,
                        &self.command,
                        actor,
                        req.table_id,
                        req.order_date,
                    )
                    .await?;

                    Ok(ApiResponse::success("Order created successfully", order.into()))
                },
            )
            .await
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✏️ Updating order id={id}");

        self.tracer
            .observe(
                "update_order",
                Method::Put,
                vec![KeyValue::new("order.id", id as i64)],
                async {
                    let mut order = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("order", id))?;

                    if let Some(table_id) = req.apply_to(&mut order) {
                        ensure_table_exists(&self.table_query, table_id).await?;
                    }

                    order.updated_at = Utc::now();

                    let order = self.command.update_order(&order).await?;

                    Ok(ApiResponse::success("Order updated successfully", order.into()))
                },
            )
            .await
    }
}
