use crate::{
    errors::RepositoryError,
    model::{NewMenu, Menu},
    utils::PageWindow,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMenuQueryRepository = Arc<dyn MenuQueryRepositoryTrait + Send + Sync>;
pub type DynMenuCommandRepository = Arc<dyn MenuCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MenuQueryRepositoryTrait {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Menu>, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Menu>, RepositoryError>;
}

#[async_trait]
pub trait MenuCommandRepositoryTrait {
    async fn create_menu(&self, menu: &NewMenu) -> Result<Menu, RepositoryError>;
    async fn update_menu(&self, menu: &Menu) -> Result<Menu, RepositoryError>;
}
