mod food;
mod invoice;
mod menu;
mod order;
mod order_item;
mod table;
mod user;

pub use self::food::{Food, NewFood};
pub use self::invoice::{Invoice, NewInvoice, ParseEnumError, PaymentMethod, PaymentStatus};
pub use self::menu::{Menu, NewMenu};
pub use self::order::{NewOrder, Order};
pub use self::order_item::{NewOrderItem, OrderItem, OrderItemDetail, UserSummary};
pub use self::table::{NewTable, Table};
pub use self::user::{NewUser, User};
