mod repository;
mod service;

pub use self::repository::{
    DynTableCommandRepository, DynTableQueryRepository, TableCommandRepositoryTrait,
    TableQueryRepositoryTrait,
};
pub use self::service::{DynTableService, TableServiceTrait};
