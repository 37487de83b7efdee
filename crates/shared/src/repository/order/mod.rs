mod command;
mod query;

use self::command::OrderCommandRepository;
use self::query::OrderQueryRepository;

use crate::{
    abstract_trait::{DynOrderCommandRepository, DynOrderQueryRepository},
    config::Database,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(OrderQueryRepository::new(db.clone())) as DynOrderQueryRepository;
        let command = Arc::new(OrderCommandRepository::new(db)) as DynOrderCommandRepository;

        Self { query, command }
    }
}
