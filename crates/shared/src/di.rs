use crate::{
    abstract_trait::{
        DynAuthService, DynFoodCommandRepository, DynFoodQueryRepository, DynFoodService,
        DynHashing, DynInvoiceCommandRepository, DynInvoiceQueryRepository, DynInvoiceService,
        DynJwtService, DynMenuCommandRepository, DynMenuQueryRepository, DynMenuService,
        DynOrderAggregation, DynOrderCommandRepository, DynOrderItemCommandRepository,
        DynOrderItemQueryRepository, DynOrderItemService, DynOrderQueryRepository,
        DynOrderService, DynTableCommandRepository, DynTableQueryRepository, DynTableService,
        DynUserCommandRepository, DynUserQueryRepository, DynUserService,
    },
    config::Database,
    repository::{
        FoodRepository, InvoiceRepository, MenuRepository, OrderItemRepository, OrderRepository,
        TableRepository, UserRepository,
    },
    service::{
        AuthService, AuthServiceDeps, FoodService, FoodServiceDeps, InvoiceService,
        InvoiceServiceDeps, MenuService, MenuServiceDeps, OrderAggregation, OrderAggregationDeps,
        OrderItemService, OrderItemServiceDeps, OrderService, OrderServiceDeps, TableService,
        TableServiceDeps, UserService,
    },
    utils::{Metrics, ServiceTracer},
};
use std::{fmt, sync::Arc};

/// Every repository the services need, behind their trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub table_query: DynTableQueryRepository,
    pub table_command: DynTableCommandRepository,
    pub menu_query: DynMenuQueryRepository,
    pub menu_command: DynMenuCommandRepository,
    pub food_query: DynFoodQueryRepository,
    pub food_command: DynFoodCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub order_item_query: DynOrderItemQueryRepository,
    pub order_item_command: DynOrderItemCommandRepository,
    pub invoice_query: DynInvoiceQueryRepository,
    pub invoice_command: DynInvoiceCommandRepository,
}

impl Repositories {
    pub fn postgres(db: Database) -> Self {
        let user = UserRepository::new(db.clone());
        let table = TableRepository::new(db.clone());
        let menu = MenuRepository::new(db.clone());
        let food = FoodRepository::new(db.clone());
        let order = OrderRepository::new(db.clone());
        let order_item = OrderItemRepository::new(db.clone());
        let invoice = InvoiceRepository::new(db);

        Self {
            user_query: user.query,
            user_command: user.command,
            table_query: table.query,
            table_command: table.command,
            menu_query: menu.query,
            menu_command: menu.command,
            food_query: food.query,
            food_command: food.command,
            order_query: order.query,
            order_command: order.command,
            order_item_query: order_item.query,
            order_item_command: order_item.command,
            invoice_query: invoice.query,
            invoice_command: invoice.command,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub table_service: DynTableService,
    pub menu_service: DynMenuService,
    pub food_service: DynFoodService,
    pub order_service: DynOrderService,
    pub order_item_service: DynOrderItemService,
    pub invoice_service: DynInvoiceService,
    pub aggregation: DynOrderAggregation,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &"<UserService>")
            .field("table_service", &"<TableService>")
            .field("menu_service", &"<MenuService>")
            .field("food_service", &"<FoodService>")
            .field("order_service", &"<OrderService>")
            .field("order_item_service", &"<OrderItemService>")
            .field("invoice_service", &"<InvoiceService>")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
    pub metrics: Metrics,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            repositories: repos,
            hashing,
            jwt,
            metrics,
        } = deps;

        let tracer = |component: &'static str| ServiceTracer::new(component, metrics.clone());

        let aggregation = Arc::new(OrderAggregation::new(OrderAggregationDeps {
            order_query: repos.order_query.clone(),
            item_query: repos.order_item_query.clone(),
            table_query: repos.table_query.clone(),
        })) as DynOrderAggregation;

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            query: repos.user_query.clone(),
            command: repos.user_command.clone(),
            hashing,
            jwt,
            tracer: tracer("auth-service"),
        })) as DynAuthService;

        let user_service = Arc::new(UserService::new(
            repos.user_query.clone(),
            tracer("user-service"),
        )) as DynUserService;

        let table_service = Arc::new(TableService::new(TableServiceDeps {
            query: repos.table_query.clone(),
            command: repos.table_command.clone(),
            tracer: tracer("table-service"),
        })) as DynTableService;

        let menu_service = Arc::new(MenuService::new(MenuServiceDeps {
            query: repos.menu_query.clone(),
            command: repos.menu_command.clone(),
            tracer: tracer("menu-service"),
        })) as DynMenuService;

        let food_service = Arc::new(FoodService::new(FoodServiceDeps {
            query: repos.food_query.clone(),
            command: repos.food_command.clone(),
            menu_query: repos.menu_query.clone(),
            tracer: tracer("food-service"),
        })) as DynFoodService;

        let order_service = Arc::new(OrderService::new(OrderServiceDeps {
            query: repos.order_query.clone(),
            command: repos.order_command.clone(),
            table_query: repos.table_query.clone(),
            tracer: tracer("order-service"),
        })) as DynOrderService;

        let order_item_service = Arc::new(OrderItemService::new(OrderItemServiceDeps {
            query: repos.order_item_query.clone(),
            command: repos.order_item_command.clone(),
            food_query: repos.food_query.clone(),
            order_query: repos.order_query.clone(),
            order_command: repos.order_command.clone(),
            table_query: repos.table_query.clone(),
            aggregation: aggregation.clone(),
            tracer: tracer("order-item-service"),
        })) as DynOrderItemService;

        let invoice_service = Arc::new(InvoiceService::new(InvoiceServiceDeps {
            query: repos.invoice_query.clone(),
            command: repos.invoice_command.clone(),
            order_query: repos.order_query.clone(),
            aggregation: aggregation.clone(),
            tracer: tracer("invoice-service"),
        })) as DynInvoiceService;

        Self {
            auth_service,
            user_service,
            table_service,
            menu_service,
            food_service,
            order_service,
            order_item_service,
            invoice_service,
            aggregation,
        }
    }
}
