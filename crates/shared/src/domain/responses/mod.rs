mod api;
mod food;
mod invoice;
mod menu;
mod order;
mod order_item;
mod pagination;
mod table;
mod token;
mod user;

pub use self::api::{ApiResponse, ApiResponseNextPage, ApiResponsePagination};
pub use self::food::FoodResponse;
pub use self::invoice::{InvoiceResponse, InvoiceViewResponse};
pub use self::menu::MenuResponse;
pub use self::order::OrderResponse;
pub use self::order_item::{
    FoodDetailResponse, OrderContextResponse, OrderItemDetailResponse, OrderItemResponse,
    OrderItemsCreatedResponse,
};
pub use self::pagination::Pagination;
pub use self::table::TableResponse;
pub use self::token::TokenResponse;
pub use self::user::{AuthResponse, UserResponse};
