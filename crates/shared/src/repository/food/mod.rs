mod command;
mod query;

use self::command::FoodCommandRepository;
use self::query::FoodQueryRepository;

use crate::{
    abstract_trait::{DynFoodCommandRepository, DynFoodQueryRepository},
    config::Database,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct FoodRepository {
    pub query: DynFoodQueryRepository,
    pub command: DynFoodCommandRepository,
}

impl FoodRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(FoodQueryRepository::new(db.clone())) as DynFoodQueryRepository;
        let command = Arc::new(FoodCommandRepository::new(db)) as DynFoodCommandRepository;

        Self { query, command }
    }
}
