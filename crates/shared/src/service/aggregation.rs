use crate::{
    abstract_trait::{
        DynOrderItemQueryRepository, DynOrderQueryRepository, DynTableQueryRepository,
        OrderAggregationTrait,
    },
    domain::responses::{InvoiceViewResponse, OrderItemDetailResponse},
    errors::ServiceError,
    model::{Invoice, Order, OrderItemDetail},
    utils::round_money,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;

pub struct OrderAggregationDeps {
    pub order_query: DynOrderQueryRepository,
    pub item_query: DynOrderItemQueryRepository,
    pub table_query: DynTableQueryRepository,
}

/// Joins an order's items with their food, menu, table and user rows and
/// derives totals from them. Nothing is cached; every call hits storage.
pub struct OrderAggregation {
    order_query: DynOrderQueryRepository,
    item_query: DynOrderItemQueryRepository,
    table_query: DynTableQueryRepository,
}

impl OrderAggregation {
    pub fn new(deps: OrderAggregationDeps) -> Self {
        let OrderAggregationDeps {
            order_query,
            item_query,
            table_query,
        } = deps;

        Self {
            order_query,
            item_query,
            table_query,
        }
    }

    async fn load_order(&self, order_id: i32) -> Result<Order, ServiceError> {
        self.order_query
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("order", order_id))
    }

    /// Table number of the first item's table, or of the order's own table
    /// when it has no items yet.
    async fn resolve_table_number(
        &self,
        order: &Order,
        details: &[OrderItemDetail],
    ) -> Result<Option<i32>, ServiceError> {
        if let Some(first) = details.first() {
            return Ok(Some(first.table.table_number));
        }

        let table = self.table_query.find_by_id(order.table_id).await?;
        Ok(table.map(|t| t.table_number))
    }
}

#[async_trait]
impl OrderAggregationTrait for OrderAggregation {
    async fn items_by_order(&self, order_id: i32) -> Result<Vec<OrderItemDetail>, ServiceError> {
        self.load_order(order_id).await?;

        let details = self.item_query.find_details_by_order(order_id).await?;
        info!("🧩 Order id={order_id} has {} items", details.len());

        Ok(details)
    }

    async fn compute_order_total(&self, order_id: i32) -> Result<Decimal, ServiceError> {
        self.load_order(order_id).await?;

        let total = self.item_query.total_for_order(order_id).await?;
        Ok(round_money(total))
    }

    async fn invoice_view(&self, invoice: Invoice) -> Result<InvoiceViewResponse, ServiceError> {
        let order = self.load_order(invoice.order_id).await?;

        let details = self.item_query.find_details_by_order(order.order_id).await?;
        let total_amount = round_money(self.item_query.total_for_order(order.order_id).await?);
        let table_number = self.resolve_table_number(&order, &details).await?;

        info!(
            "🧾 Invoice id={} view: order id={} total={total_amount}",
            invoice.invoice_id, order.order_id
        );

        Ok(InvoiceViewResponse {
            id: invoice.invoice_id,
            order_id: invoice.order_id,
            payment_method: invoice.payment_method,
            payment_status: invoice.payment_status,
            payment_due_date: invoice.payment_due_date,
            table_number,
            total_amount,
            order_details: details
                .into_iter()
                .map(OrderItemDetailResponse::from)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        di::Repositories,
        model::{
            NewFood, NewMenu, NewOrder, NewOrderItem, NewTable, NewUser, PaymentMethod,
            PaymentStatus,
        },
        testing::MemoryStore,
    };
    use chrono::Utc;
    use rust_decimal_macros::dec;

    async fn seed(repos: &Repositories) -> (i32, i32) {
        let now = Utc::now();

        let user = repos
            .user_command
            .create_user(&NewUser {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                password: "hash".into(),
                is_admin: false,
                created_at: now,
            })
            .await
            .unwrap();
        let table = repos
            .table_command
            .create_table(&NewTable {
                number_of_guests: 4,
                table_number: 7,
                created_at: now,
            })
            .await
            .unwrap();
        let menu = repos
            .menu_command
            .create_menu(&NewMenu {
                name: "Dinner".into(),
                category: "main".into(),
                start_date: None,
                end_date: None,
                created_at: now,
            })
            .await
            .unwrap();
        let food = repos
            .food_command
            .create_food(&NewFood {
                name: "Pasta".into(),
                price: dec!(5.00),
                image: "pasta.png".into(),
                menu_id: menu.menu_id,
                created_at: now,
            })
            .await
            .unwrap();
        let order = repos
            .order_command
            .create_order(&NewOrder {
                order_date: now,
                table_id: table.table_id,
                user_id: user.user_id,
                created_at: now,
            })
            .await
            .unwrap();

        (order.order_id, food.food_id)
    }

    fn engine(repos: &Repositories) -> OrderAggregation {
        OrderAggregation::new(OrderAggregationDeps {
            order_query: repos.order_query.clone(),
            item_query: repos.order_item_query.clone(),
            table_query: repos.table_query.clone(),
        })
    }

    fn item(food_id: i32, quantity: i32, unit_price: Decimal) -> NewOrderItem {
        NewOrderItem {
            quantity,
            unit_price,
            food_id,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn total_is_sum_of_quantity_times_price() {
        let repos = MemoryStore::new().repositories();
        let (order_id, food_id) = seed(&repos).await;
        let engine = engine(&repos);

        assert_eq!(engine.compute_order_total(order_id).await.unwrap(), dec!(0.00));

        repos
            .order_item_command
            .create_order_items(
                order_id,
                &[item(food_id, 2, dec!(5.00)), item(food_id, 1, dec!(3.00))],
            )
            .await
            .unwrap();

        assert_eq!(engine.compute_order_total(order_id).await.unwrap(), dec!(13.00));

        repos
            .order_item_command
            .create_order_items(order_id, &[item(food_id, 4, dec!(0.25))])
            .await
            .unwrap();

        assert_eq!(engine.compute_order_total(order_id).await.unwrap(), dec!(14.00));
    }

    #[tokio::test]
    async fn details_are_joined_and_sorted() {
        let repos = MemoryStore::new().repositories();
        let (order_id, food_id) = seed(&repos).await;

        repos
            .order_item_command
            .create_order_items(
                order_id,
                &[item(food_id, 1, dec!(1.00)), item(food_id, 2, dec!(2.00))],
            )
            .await
            .unwrap();

        let details = engine(&repos).items_by_order(order_id).await.unwrap();

        assert_eq!(details.len(), 2);
        assert!(details[0].item.order_item_id < details[1].item.order_item_id);
        assert_eq!(details[0].menu.name, "Dinner");
        assert_eq!(details[0].table.table_number, 7);
        assert_eq!(details[0].user.email, "ana@example.com");
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let repos = MemoryStore::new().repositories();
        let engine = engine(&repos);

        assert!(matches!(
            engine.items_by_order(99).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            engine.compute_order_total(99).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn invoice_view_falls_back_to_order_table() {
        let repos = MemoryStore::new().repositories();
        let (order_id, _) = seed(&repos).await;
        let now = Utc::now();

        let invoice = Invoice {
            invoice_id: 1,
            order_id,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            payment_due_date: now,
            created_at: now,
            updated_at: now,
        };

        let view = engine(&repos).invoice_view(invoice).await.unwrap();

        assert_eq!(view.table_number, Some(7));
        assert_eq!(view.total_amount, dec!(0.00));
        assert!(view.order_details.is_empty());
    }
}
