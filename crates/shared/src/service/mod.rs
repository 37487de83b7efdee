mod aggregation;
mod auth;
mod food;
mod invoice;
mod menu;
mod order;
mod order_item;
mod table;
mod user;

pub use self::aggregation::{OrderAggregation, OrderAggregationDeps};
pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::food::{FoodService, FoodServiceDeps};
pub use self::invoice::{InvoiceService, InvoiceServiceDeps};
pub use self::menu::{MenuService, MenuServiceDeps};
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::order_item::{OrderItemService, OrderItemServiceDeps};
pub use self::table::{TableService, TableServiceDeps};
pub use self::user::UserService;
