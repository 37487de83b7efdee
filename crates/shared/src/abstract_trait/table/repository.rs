use crate::{
    errors::RepositoryError,
    model::{NewTable, Table},
    utils::PageWindow,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTableQueryRepository = Arc<dyn TableQueryRepositoryTrait + Send + Sync>;
pub type DynTableCommandRepository = Arc<dyn TableCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TableQueryRepositoryTrait {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<Table>, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Table>, RepositoryError>;
}

#[async_trait]
pub trait TableCommandRepositoryTrait {
    async fn create_table(&self, table: &NewTable) -> Result<Table, RepositoryError>;
    async fn update_table(&self, table: &Table) -> Result<Table, RepositoryError>;
}
