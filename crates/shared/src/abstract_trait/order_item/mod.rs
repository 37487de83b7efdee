mod aggregation;
mod repository;
mod service;

pub use self::aggregation::{DynOrderAggregation, OrderAggregationTrait};
pub use self::repository::{
    DynOrderItemCommandRepository, DynOrderItemQueryRepository, OrderItemCommandRepositoryTrait,
    OrderItemQueryRepositoryTrait,
};
pub use self::service::{DynOrderItemService, OrderItemServiceTrait};
