use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{NewUser, User},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{error, info};

pub struct UserCommandRepository {
    db: Database,
}

impl UserCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        info!("🆕 Inserting user");

        self.db
            .bounded(
                "create_user",
                sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (name, email, password, is_admin, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $5)
                    RETURNING user_id, name, email, password, is_admin, token, refresh_token,
                              created_at, updated_at
                    "#,
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.password)
                .bind(user.is_admin)
                .bind(user.created_at)
                .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn update_tokens(
        &self,
        user_id: i32,
        access_token: &str,
        refresh_token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = self
            .db
            .bounded(
                "update_user_tokens",
                sqlx::query(
                    r#"
                    UPDATE users
                    SET token = $2,
                        refresh_token = $3,
                        updated_at = $4
                    WHERE user_id = $1
                    "#,
                )
                .bind(user_id)
                .bind(access_token)
                .bind(refresh_token)
                .bind(updated_at)
                .execute(self.db.pool()),
            )
            .await?;

        if result.rows_affected() == 0 {
            error!("❌ No user row to store tokens for id={user_id}");
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
