mod food;
mod invoice;
mod menu;
mod order;
mod order_item;
mod table;
mod user;

pub use self::food::FoodRepository;
pub use self::invoice::InvoiceRepository;
pub use self::menu::MenuRepository;
pub use self::order::OrderRepository;
pub use self::order_item::OrderItemRepository;
pub use self::table::TableRepository;
pub use self::user::UserRepository;
