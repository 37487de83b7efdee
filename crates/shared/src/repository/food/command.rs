use crate::{
    abstract_trait::FoodCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{NewFood, Food},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct FoodCommandRepository {
    db: Database,
}

impl FoodCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodCommandRepositoryTrait for FoodCommandRepository {
    async fn create_food(&self, food: &NewFood) -> Result<Food, RepositoryError> {
        info!("🆕 Inserting food");

        self.db
            .bounded(
                "create_food",
                sqlx::query_as::<_, Food>(
                    r#"
                    INSERT INTO foods (name, price, image, menu_id, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $5)
                    RETURNING food_id, name, price, image, menu_id, created_at, updated_at
                    "#,
                )
                .bind(&food.name)
                .bind(food.price)
                .bind(&food.image)
                .bind(food.menu_id)
                .bind(food.created_at)
                .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn update_food(&self, food: &Food) -> Result<Food, RepositoryError> {
        info!("✏️ Updating food id={}", food.food_id);

        let updated = self
            .db
            .bounded(
                "update_food",
                sqlx::query_as::<_, Food>(
                    r#"
                    UPDATE foods
                    SET name = $2,
                        price = $3,
                        image = $4,
                        menu_id = $5,
                        updated_at = $6
                    WHERE food_id = $1
                    RETURNING food_id, name, price, image, menu_id, created_at, updated_at
                    "#,
                )
                .bind(food.food_id)
                .bind(&food.name)
                .bind(food.price)
                .bind(&food.image)
                .bind(food.menu_id)
                .bind(food.updated_at)
                .fetch_optional(self.db.pool()),
            )
            .await?;

        updated.ok_or_else(|| {
            error!("❌ Food id={} vanished before update", food.food_id);
            RepositoryError::NotFound
        })
    }
}
