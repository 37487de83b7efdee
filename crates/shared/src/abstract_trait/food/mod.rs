mod repository;
mod service;

pub use self::repository::{
    DynFoodCommandRepository, DynFoodQueryRepository, FoodCommandRepositoryTrait,
    FoodQueryRepositoryTrait,
};
pub use self::service::{DynFoodService, FoodServiceTrait};
