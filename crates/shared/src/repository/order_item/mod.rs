mod command;
mod query;

use self::command::OrderItemCommandRepository;
use self::query::OrderItemQueryRepository;

use crate::{
    abstract_trait::{DynOrderItemCommandRepository, DynOrderItemQueryRepository},
    config::Database,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderItemRepository {
    pub query: DynOrderItemQueryRepository,
    pub command: DynOrderItemCommandRepository,
}

impl OrderItemRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(OrderItemQueryRepository::new(db.clone())) as DynOrderItemQueryRepository;
        let command = Arc::new(OrderItemCommandRepository::new(db)) as DynOrderItemCommandRepository;

        Self { query, command }
    }
}
