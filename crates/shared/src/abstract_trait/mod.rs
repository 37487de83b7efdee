mod auth;
mod food;
mod hashing;
mod invoice;
mod jwt;
mod menu;
mod order;
mod order_item;
mod table;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::food::{
    DynFoodCommandRepository, DynFoodQueryRepository, DynFoodService, FoodCommandRepositoryTrait,
    FoodQueryRepositoryTrait, FoodServiceTrait,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::invoice::{
    DynInvoiceCommandRepository, DynInvoiceQueryRepository, DynInvoiceService,
    InvoiceCommandRepositoryTrait, InvoiceQueryRepositoryTrait, InvoiceServiceTrait,
};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::menu::{
    DynMenuCommandRepository, DynMenuQueryRepository, DynMenuService, MenuCommandRepositoryTrait,
    MenuQueryRepositoryTrait, MenuServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynOrderService,
    OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::order_item::{
    DynOrderAggregation, DynOrderItemCommandRepository, DynOrderItemQueryRepository,
    DynOrderItemService, OrderAggregationTrait, OrderItemCommandRepositoryTrait,
    OrderItemQueryRepositoryTrait, OrderItemServiceTrait,
};
pub use self::table::{
    DynTableCommandRepository, DynTableQueryRepository, DynTableService,
    TableCommandRepositoryTrait, TableQueryRepositoryTrait, TableServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, DynUserService, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait, UserServiceTrait,
};
