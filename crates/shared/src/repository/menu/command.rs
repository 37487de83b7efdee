use crate::{
    abstract_trait::MenuCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{NewMenu, Menu},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct MenuCommandRepository {
    db: Database,
}

impl MenuCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuCommandRepositoryTrait for MenuCommandRepository {
    async fn create_menu(&self, menu: &NewMenu) -> Result<Menu, RepositoryError> {
        info!("🆕 Inserting menu");

        self.db
            .bounded(
                "create_menu",
                sqlx::query_as::<_, Menu>(
                    r#"
                    INSERT INTO menus (name, category, start_date, end_date, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $5)
                    RETURNING menu_id, name, category, start_date, end_date, created_at, updated_at
                    "#,
                )
                .bind(&menu.name)
                .bind(&menu.category)
                .bind(menu.start_date)
                .bind(menu.end_date)
                .bind(menu.created_at)
                .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn update_menu(&self, menu: &Menu) -> Result<Menu, RepositoryError> {
        info!("✏️ Updating menu id={}", menu.menu_id);

        let updated = self
            .db
            .bounded(
                "update_menu",
                sqlx::query_as::<_, Menu>(
                    r#"
                    UPDATE menus
                    SET name = $2,
                        category = $3,
                        start_date = $4,
                        end_date = $5,
                        updated_at = $6
                    WHERE menu_id = $1
                    RETURNING menu_id, name, category, start_date, end_date, created_at, updated_at
                    "#,
                )
                .bind(menu.menu_id)
                .bind(&menu.name)
                .bind(&menu.category)
                .bind(menu.start_date)
                .bind(menu.end_date)
                .bind(menu.updated_at)
                .fetch_optional(self.db.pool()),
            )
            .await?;

        updated.ok_or_else(|| {
            error!("❌ Menu id={} vanished before update", menu.menu_id);
            RepositoryError::NotFound
        })
    }
}
