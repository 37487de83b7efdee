use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::Database, errors::RepositoryError,
    model::User, utils::PageWindow,
};
use async_trait::async_trait;
use tracing::info;

pub struct UserQueryRepository {
    db: Database,
}

impl UserQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self, window: &PageWindow) -> Result<Vec<User>, RepositoryError> {
        info!("🔍 Fetching users page={} size={}", window.page, window.limit);

        let users = self
            .db
            .bounded(
                "find_all_users",
                sqlx::query_as::<_, User>(
                    r#"
                    SELECT user_id, name, email, password, is_admin, token, refresh_token,
                           created_at, updated_at
                    FROM users
                    ORDER BY user_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.limit)
                .bind(window.offset)
                .fetch_all(self.db.pool()),
            )
            .await?;

        Ok(users)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        self.db
            .bounded(
                "count_users",
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        info!("🆔 Fetching user id={id}");

        self.db
            .bounded(
                "find_user_by_id",
                sqlx::query_as::<_, User>(
                    r#"
                    SELECT user_id, name, email, password, is_admin, token, refresh_token,
                           created_at, updated_at
                    FROM users
                    WHERE user_id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(self.db.pool()),
            )
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        info!("📧 Fetching user by email");

        self.db
            .bounded(
                "find_user_by_email",
                sqlx::query_as::<_, User>(
                    r#"
                    SELECT user_id, name, email, password, is_admin, token, refresh_token,
                           created_at, updated_at
                    FROM users
                    WHERE email = $1
                    "#,
                )
                .bind(email)
                .fetch_optional(self.db.pool()),
            )
            .await
    }
}
