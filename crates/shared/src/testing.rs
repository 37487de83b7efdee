//! In-memory repositories for tests. Enabled with the `testing` feature.

use crate::{
    abstract_trait::{
        FoodCommandRepositoryTrait, FoodQueryRepositoryTrait, InvoiceCommandRepositoryTrait,
        InvoiceQueryRepositoryTrait, MenuCommandRepositoryTrait, MenuQueryRepositoryTrait,
        OrderCommandRepositoryTrait, OrderItemCommandRepositoryTrait,
        OrderItemQueryRepositoryTrait, OrderQueryRepositoryTrait, TableCommandRepositoryTrait,
        TableQueryRepositoryTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    di::Repositories,
    errors::RepositoryError,
    model::{
        Food, Invoice, Menu, NewFood, NewInvoice, NewMenu, NewOrder, NewOrderItem, NewTable,
        NewUser, Order, OrderItem, OrderItemDetail, Table, User, UserSummary,
    },
    utils::PageWindow,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Default)]
struct Rows {
    users: BTreeMap<i32, User>,
    tables: BTreeMap<i32, Table>,
    menus: BTreeMap<i32, Menu>,
    foods: BTreeMap<i32, Food>,
    orders: BTreeMap<i32, Order>,
    order_items: BTreeMap<i32, OrderItem>,
    invoices: BTreeMap<i32, Invoice>,
}

fn next_id<T>(rows: &BTreeMap<i32, T>) -> i32 {
    rows.keys().next_back().map_or(1, |id| id + 1)
}

fn page<T: Clone>(rows: &BTreeMap<i32, T>, offset: i64, limit: i64) -> Vec<T> {
    rows.values()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect()
}

fn missing_fk(entity: &str, id: i32) -> RepositoryError {
    RepositoryError::ForeignKey(format!("{entity} {id} does not exist"))
}

/// Shared in-memory store. Ids are assigned sequentially per table, listings
/// are ordered by id, and foreign keys are checked on insert.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<Rows>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> Repositories {
        let store = Arc::new(self.clone());

        Repositories {
            user_query: store.clone(),
            user_command: store.clone(),
            table_query: store.clone(),
            table_command: store.clone(),
            menu_query: store.clone(),
            menu_command: store.clone(),
            food_query: store.clone(),
            food_command: store.clone(),
            order_query: store.clone(),
            order_command: store.clone(),
            order_item_query: store.clone(),
            order_item_command: store.clone(),
            invoice_query: store.clone(),
            invoice_command: store,
        }
    }

    /// Stored access token for a user, as written by signup or login.
    pub async fn stored_token(&self, user_id: i32) -> Option<String> {
        let rows = self.rows.lock().await;
        rows.users.get(&user_id).and_then(|u| u.token.clone())
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<User>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(page(&rows.users, window.offset, window.limit))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.rows.lock().await.users.len() as i64)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.rows.lock().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(rows.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryStore {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut rows = self.rows.lock().await;

        if rows.users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email {} already exists",
                user.email
            )));
        }

        let created = User {
            user_id: next_id(&rows.users),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            is_admin: user.is_admin,
            token: None,
            refresh_token: None,
            created_at: user.created_at,
            updated_at: user.created_at,
        };
        rows.users.insert(created.user_id, created.clone());

        Ok(created)
    }

    async fn update_tokens(
        &self,
        user_id: i32,
        access_token: &str,
        refresh_token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().await;
        let user = rows
            .users
            .get_mut(&user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.token = Some(access_token.to_string());
        user.refresh_token = Some(refresh_token.to_string());
        user.updated_at = updated_at;

        Ok(())
    }
}

#[async_trait]
impl TableQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Table>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(page(&rows.tables, window.offset, window.limit))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.rows.lock().await.tables.len() as i64)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Table>, RepositoryError> {
        Ok(self.rows.lock().await.tables.get(&id).cloned())
    }
}

#[async_trait]
impl TableCommandRepositoryTrait for MemoryStore {
    async fn create_table(&self, table: &NewTable) -> Result<Table, RepositoryError> {
        let mut rows = self.rows.lock().await;

        let created = Table {
            table_id: next_id(&rows.tables),
            number_of_guests: table.number_of_guests,
            table_number: table.table_number,
            created_at: table.created_at,
            updated_at: table.created_at,
        };
        rows.tables.insert(created.table_id, created.clone());

        Ok(created)
    }

    async fn update_table(&self, table: &Table) -> Result<Table, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let slot = rows
            .tables
            .get_mut(&table.table_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = table.clone();
        Ok(table.clone())
    }
}

#[async_trait]
impl MenuQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Menu>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(page(&rows.menus, window.offset, window.limit))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.rows.lock().await.menus.len() as i64)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Menu>, RepositoryError> {
        Ok(self.rows.lock().await.menus.get(&id).cloned())
    }
}

#[async_trait]
impl MenuCommandRepositoryTrait for MemoryStore {
    async fn create_menu(&self, menu: &NewMenu) -> Result<Menu, RepositoryError> {
        let mut rows = self.rows.lock().await;

        let created = Menu {
            menu_id: next_id(&rows.menus),
            name: menu.name.clone(),
            category: menu.category.clone(),
            start_date: menu.start_date,
            end_date: menu.end_date,
            created_at: menu.created_at,
            updated_at: menu.created_at,
        };
        rows.menus.insert(created.menu_id, created.clone());

        Ok(created)
    }

    async fn update_menu(&self, menu: &Menu) -> Result<Menu, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let slot = rows
            .menus
            .get_mut(&menu.menu_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = menu.clone();
        Ok(menu.clone())
    }
}

#[async_trait]
impl FoodQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Food>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(page(&rows.foods, window.offset, window.probe_limit()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Food>, RepositoryError> {
        Ok(self.rows.lock().await.foods.get(&id).cloned())
    }
}

#[async_trait]
impl FoodCommandRepositoryTrait for MemoryStore {
    async fn create_food(&self, food: &NewFood) -> Result<Food, RepositoryError> {
        let mut rows = self.rows.lock().await;

        if !rows.menus.contains_key(&food.menu_id) {
            return Err(missing_fk("menu", food.menu_id));
        }

        let created = Food {
            food_id: next_id(&rows.foods),
            name: food.name.clone(),
            price: food.price,
            image: food.image.clone(),
            menu_id: food.menu_id,
            created_at: food.created_at,
            updated_at: food.created_at,
        };
        rows.foods.insert(created.food_id, created.clone());

        Ok(created)
    }

    async fn update_food(&self, food: &Food) -> Result<Food, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let slot = rows
            .foods
            .get_mut(&food.food_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = food.clone();
        Ok(food.clone())
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Order>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(page(&rows.orders, window.offset, window.probe_limit()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self.rows.lock().await.orders.get(&id).cloned())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryStore {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let mut rows = self.rows.lock().await;

        if !rows.tables.contains_key(&order.table_id) {
            return Err(missing_fk("table", order.table_id));
        }
        if !rows.users.contains_key(&order.user_id) {
            return Err(missing_fk("user", order.user_id));
        }

        let created = Order {
            order_id: next_id(&rows.orders),
            order_date: order.order_date,
            table_id: order.table_id,
            user_id: order.user_id,
            created_at: order.created_at,
            updated_at: order.created_at,
        };
        rows.orders.insert(created.order_id, created.clone());

        Ok(created)
    }

    async fn update_order(&self, order: &Order) -> Result<Order, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let slot = rows
            .orders
            .get_mut(&order.order_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = order.clone();
        Ok(order.clone())
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(page(&rows.order_items, window.offset, window.probe_limit()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderItem>, RepositoryError> {
        Ok(self.rows.lock().await.order_items.get(&id).cloned())
    }

    async fn find_details_by_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        let rows = self.rows.lock().await;

        // Inner-join semantics: items whose related rows are missing drop out.
        let details = rows
            .order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .filter_map(|item| {
                let food = rows.foods.get(&item.food_id)?;
                let menu = rows.menus.get(&food.menu_id)?;
                let order = rows.orders.get(&item.order_id)?;
                let table = rows.tables.get(&order.table_id)?;
                let user = rows.users.get(&order.user_id)?;

                Some(OrderItemDetail {
                    item: item.clone(),
                    food: food.clone(),
                    menu: menu.clone(),
                    order: order.clone(),
                    table: table.clone(),
                    user: UserSummary {
                        user_id: user.user_id,
                        name: user.name.clone(),
                        email: user.email.clone(),
                    },
                })
            })
            .collect();

        Ok(details)
    }

    async fn total_for_order(&self, order_id: i32) -> Result<Decimal, RepositoryError> {
        let rows = self.rows.lock().await;

        Ok(rows
            .order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .map(OrderItem::line_total)
            .sum())
    }
}

#[async_trait]
impl OrderItemCommandRepositoryTrait for MemoryStore {
    async fn create_order_items(
        &self,
        order_id: i32,
        items: &[NewOrderItem],
    ) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut rows = self.rows.lock().await;

        if !rows.orders.contains_key(&order_id) {
            return Err(missing_fk("order", order_id));
        }
        if let Some(item) = items.iter().find(|i| !rows.foods.contains_key(&i.food_id)) {
            return Err(missing_fk("food", item.food_id));
        }

        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let row = OrderItem {
                order_item_id: next_id(&rows.order_items),
                quantity: item.quantity,
                unit_price: item.unit_price,
                food_id: item.food_id,
                order_id,
                created_at: item.created_at,
                updated_at: item.created_at,
            };
            rows.order_items.insert(row.order_item_id, row.clone());
            created.push(row);
        }

        Ok(created)
    }

    async fn update_order_item(&self, item: &OrderItem) -> Result<OrderItem, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let slot = rows
            .order_items
            .get_mut(&item.order_item_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = item.clone();
        Ok(item.clone())
    }
}

#[async_trait]
impl InvoiceQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Invoice>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(page(&rows.invoices, window.offset, window.limit))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.rows.lock().await.invoices.len() as i64)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, RepositoryError> {
        Ok(self.rows.lock().await.invoices.get(&id).cloned())
    }
}

#[async_trait]
impl InvoiceCommandRepositoryTrait for MemoryStore {
    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, RepositoryError> {
        let mut rows = self.rows.lock().await;

        if !rows.orders.contains_key(&invoice.order_id) {
            return Err(missing_fk("order", invoice.order_id));
        }

        let created = Invoice {
            invoice_id: next_id(&rows.invoices),
            order_id: invoice.order_id,
            payment_method: invoice.payment_method,
            payment_status: invoice.payment_status,
            payment_due_date: invoice.payment_due_date,
            created_at: invoice.created_at,
            updated_at: invoice.created_at,
        };
        rows.invoices.insert(created.invoice_id, created.clone());

        Ok(created)
    }

    async fn update_invoice(&self, invoice: &Invoice) -> Result<Invoice, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let slot = rows
            .invoices
            .get_mut(&invoice.invoice_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = invoice.clone();
        Ok(invoice.clone())
    }
}
