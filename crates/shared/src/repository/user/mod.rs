mod command;
mod query;

use self::command::UserCommandRepository;
use self::query::UserQueryRepository;

use crate::{
    abstract_trait::{DynUserCommandRepository, DynUserQueryRepository},
    config::Database,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(UserQueryRepository::new(db.clone())) as DynUserQueryRepository;
        let command = Arc::new(UserCommandRepository::new(db)) as DynUserCommandRepository;

        Self { query, command }
    }
}
