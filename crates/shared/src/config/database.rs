use crate::errors::RepositoryError;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::{future::Future, time::Duration};
use tracing::{error, info};

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(connection_string)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        info!("🗄️ Database pool ready (max_connections={max_connections})");

        Ok(pool)
    }
}

/// Pool handle handed to every repository. Each storage call goes through
/// [`Database::bounded`] so it cannot outlive `query_timeout`.
#[derive(Clone)]
pub struct Database {
    pool: ConnectionPool,
    query_timeout: Duration,
}

impl Database {
    pub fn new(pool: ConnectionPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        bounded(self.query_timeout, operation, fut).await
    }
}

/// Runs a storage future under a deadline. Expiry drops the future, which
/// cancels the in-flight query.
pub async fn bounded<T, F>(
    limit: Duration,
    operation: &'static str,
    fut: F,
) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            error!("❌ {operation} failed: {:?}", err);
            Err(RepositoryError::from(err))
        }
        Err(_) => {
            error!("⏱️ {operation} exceeded {:?}", limit);
            Err(RepositoryError::Timeout(operation.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bounded_passes_through_results() {
        let value = bounded(Duration::from_secs(1), "ok", async { Ok::<_, sqlx::Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn bounded_maps_expiry_to_timeout() {
        let result: Result<(), _> = bounded(Duration::from_millis(10), "slow_query", async {
            std::future::pending::<Result<(), sqlx::Error>>().await
        })
        .await;

        match result {
            Err(RepositoryError::Timeout(op)) => assert_eq!(op, "slow_query"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bounded_wraps_driver_errors() {
        let result: Result<(), _> = bounded(Duration::from_secs(1), "find_food", async {
            Err(sqlx::Error::RowNotFound)
        })
        .await;

        assert!(matches!(result, Err(RepositoryError::Sqlx(_))));
    }
}
