use crate::{
    abstract_trait::{
        DynFoodQueryRepository, DynOrderAggregation, DynOrderCommandRepository,
        DynOrderItemCommandRepository, DynOrderItemQueryRepository, DynOrderQueryRepository,
        DynTableQueryRepository, OrderItemServiceTrait,
    },
    domain::{
        CurrentUser,
        requests::{CreateOrderItemsRequest, FindAllQuery, OrderItemInput, UpdateOrderItemRequest},
        responses::{
            ApiResponse, ApiResponseNextPage, OrderItemDetailResponse, OrderItemResponse,
            OrderItemsCreatedResponse,
        },
    },
    errors::ServiceError,
    model::NewOrderItem,
    service::order::open_order,
    utils::{Method, ServiceTracer, ensure_positive_amount},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 20;

pub struct OrderItemServiceDeps {
    pub query: DynOrderItemQueryRepository,
    pub command: DynOrderItemCommandRepository,
    pub food_query: DynFoodQueryRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub table_query: DynTableQueryRepository,
    pub aggregation: DynOrderAggregation,
    pub tracer: ServiceTracer,
}

pub struct OrderItemService {
    query: DynOrderItemQueryRepository,
    command: DynOrderItemCommandRepository,
    food_query: DynFoodQueryRepository,
    order_query: DynOrderQueryRepository,
    order_command: DynOrderCommandRepository,
    table_query: DynTableQueryRepository,
    aggregation: DynOrderAggregation,
    tracer: ServiceTracer,
}

impl OrderItemService {
    pub fn new(deps: OrderItemServiceDeps) -> Self {
        let OrderItemServiceDeps {
            query,
            command,
            food_query,
            order_query,
            order_command,
            table_query,
            aggregation,
            tracer,
        } = deps;

        Self {
            query,
            command,
            food_query,
            order_query,
            order_command,
            table_query,
            aggregation,
            tracer,
        }
    }

    async fn ensure_food_exists(&self, food_id: i32) -> Result<(), ServiceError> {
        match self.food_query.find_by_id(food_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::missing_reference("food", food_id)),
        }
    }

    async fn prepare_item(&self, input: &OrderItemInput) -> Result<NewOrderItem, ServiceError> {
        self.ensure_food_exists(input.food_id).await?;

        Ok(NewOrderItem {
            quantity: input.quantity,
            unit_price: ensure_positive_amount("unitPrice", input.unit_price)?,
            food_id: input.food_id,
            created_at: Utc::now(),
        })
    }

    /// Resolves the order the pack goes into, opening one on the pack's table
    /// when no item names an order.
    async fn resolve_order(
        &self,
        actor: &CurrentUser,
        target: Option<i32>,
        table_id: Option<i32>,
    ) -> Result<i32, ServiceError> {
        if let Some(order_id) = target {
            return match self.order_query.find_by_id(order_id).await? {
                Some(order) => Ok(order.order_id),
                None => Err(ServiceError::missing_reference("order", order_id)),
            };
        }

        let table_id = table_id
            .filter(|id| *id > 0)
            .ok_or_else(|| ServiceError::invalid("tableId is required when no orderId is given"))?;

        let order = open_order(&self.table_query, &self.order_command, actor, table_id, None).await?;
        Ok(order.order_id)
    }
}

#[async_trait]
impl OrderItemServiceTrait for OrderItemService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponseNextPage<Vec<OrderItemResponse>>, ServiceError> {
        let window = req.window(DEFAULT_PAGE_SIZE);

        self.tracer
            .observe(
                "find_all_order_items",
                Method::Get,
                vec![KeyValue::new("page", window.page)],
                async {
                    let rows = self.query.find_all(&window).await?;
                    let (items, next_page) = window.split_next_page(rows);

                    Ok(ApiResponseNextPage::success(
                        "Order items retrieved successfully",
                        items.into_iter().map(OrderItemResponse::from).collect(),
                        window.page,
                        next_page,
                    ))
                },
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        self.tracer
            .observe(
                "find_order_item_by_id",
                Method::Get,
                vec![KeyValue::new("order_item.id", id as i64)],
                async {
                    let item = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("order item", id))?;

                    Ok(ApiResponse::success(
                        "Order item retrieved successfully",
                        item.into(),
                    ))
                },
            )
            .await
    }

    async fn find_by_order(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<OrderItemDetailResponse>>, ServiceError> {
        self.tracer
            .observe(
                "find_order_items_by_order",
                Method::Get,
                vec![KeyValue::new("order.id", order_id as i64)],
                async {
                    let details = self.aggregation.items_by_order(order_id).await?;

                    Ok(ApiResponse::success(
                        "Order items retrieved successfully",
                        details
                            .into_iter()
                            .map(OrderItemDetailResponse::from)
                            .collect(),
                    ))
                },
            )
            .await
    }

    async fn create_order_items(
        &self,
        actor: &CurrentUser,
        req: &CreateOrderItemsRequest,
    ) -> Result<ApiResponse<OrderItemsCreatedResponse>, ServiceError> {
        info!(
            "🛒 Creating {} order items for user id={}",
            req.order_items.len(),
            actor.user_id
        );

        self.tracer
            .observe(
                "create_order_items",
                Method::Post,
                vec![
                    KeyValue::new("user.id", actor.user_id as i64),
                    KeyValue::new("items", req.order_items.len() as i64),
                ],
                async {
                    if req.order_items.is_empty() {
                        return Err(ServiceError::invalid("At least one order item is required"));
                    }

                    let target = req.target_order()?;

                    let mut prepared = Vec::with_capacity(req.order_items.len());
                    for input in &req.order_items {
                        prepared.push(self.prepare_item(input).await?);
                    }

                    let order_id = self.resolve_order(actor, target, req.table_id).await?;
                    let items = self.command.create_order_items(order_id, &prepared).await?;

                    Ok(ApiResponse::success(
                        "Order items created successfully",
                        OrderItemsCreatedResponse {
                            order_id,
                            items: items.into_iter().map(OrderItemResponse::from).collect(),
                        },
                    ))
                },
            )
            .await
    }

    async fn update_order_item(
        &self,
        id: i32,
        req: &UpdateOrderItemRequest,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        info!("✏️ Updating order item id={id}");

        self.tracer
            .observe(
                "update_order_item",
                Method::Put,
                vec![KeyValue::new("order_item.id", id as i64)],
                async {
                    let mut item = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("order item", id))?;

                    if let Some(food_id) = req.apply_to(&mut item) {
                        self.ensure_food_exists(food_id).await?;
                    }

                    item.unit_price = ensure_positive_amount("unitPrice", item.unit_price)?;
                    item.updated_at = Utc::now();

                    let item = self.command.update_order_item(&item).await?;

                    Ok(ApiResponse::success(
                        "Order item updated successfully",
                        item.into(),
                    ))
                },
            )
            .await
    }
}
