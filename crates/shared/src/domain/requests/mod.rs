mod auth;
mod food;
mod invoice;
mod menu;
mod order;
mod order_item;
mod pagination;
mod table;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::food::{CreateFoodRequest, UpdateFoodRequest};
pub use self::invoice::{CreateInvoiceRequest, UpdateInvoiceRequest};
pub use self::menu::{CreateMenuRequest, UpdateMenuRequest, check_date_range};
pub use self::order::{CreateOrderRequest, UpdateOrderRequest};
pub use self::order_item::{CreateOrderItemsRequest, OrderItemInput, UpdateOrderItemRequest};
pub use self::pagination::FindAllQuery;
pub use self::table::{CreateTableRequest, UpdateTableRequest};

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn non_zero(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}
