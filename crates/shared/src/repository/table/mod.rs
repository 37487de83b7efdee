mod command;
mod query;

use self::command::TableCommandRepository;
use self::query::TableQueryRepository;

use crate::{
    abstract_trait::{DynTableCommandRepository, DynTableQueryRepository},
    config::Database,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct TableRepository {
    pub query: DynTableQueryRepository,
    pub command: DynTableCommandRepository,
}

impl TableRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(TableQueryRepository::new(db.clone())) as DynTableQueryRepository;
        let command = Arc::new(TableCommandRepository::new(db)) as DynTableCommandRepository;

        Self { query, command }
    }
}
