mod command;
mod query;

use self::command::MenuCommandRepository;
use self::query::MenuQueryRepository;

use crate::{
    abstract_trait::{DynMenuCommandRepository, DynMenuQueryRepository},
    config::Database,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct MenuRepository {
    pub query: DynMenuQueryRepository,
    pub command: DynMenuCommandRepository,
}

impl MenuRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(MenuQueryRepository::new(db.clone())) as DynMenuQueryRepository;
        let command = Arc::new(MenuCommandRepository::new(db)) as DynMenuCommandRepository;

        Self { query, command }
    }
}
