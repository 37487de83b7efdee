mod repository;
mod service;

pub use self::repository::{
    DynMenuCommandRepository, DynMenuQueryRepository, MenuCommandRepositoryTrait,
    MenuQueryRepositoryTrait,
};
pub use self::service::{DynMenuService, MenuServiceTrait};
