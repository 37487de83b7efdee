use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionManager, Database, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps, Repositories},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &self.jwt_config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(
            &config.database_url,
            config.db_max_connections,
            config.db_query_timeout,
        )
        .await
        .context("Failed to connect to Postgres")?;

        let db = Database::new(pool, config.db_query_timeout);

        let state = Self::build(
            Repositories::postgres(db),
            Arc::new(JwtConfig::new(&config.jwt_secret)),
            Arc::new(Hashing::new(config.bcrypt_cost)),
        );

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        info!("🧩 Application state initialized");

        Ok(state)
    }

    /// Wires services over the given repositories without touching the network.
    pub fn build(repositories: Repositories, jwt_config: DynJwtService, hashing: DynHashing) -> Self {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        let system_metrics = Arc::new(SystemMetrics::new());

        metrics.register(&mut registry);
        system_metrics.register(&mut registry);

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            repositories,
            hashing,
            jwt: jwt_config.clone(),
            metrics: metrics.clone(),
        });

        Self {
            di_container,
            jwt_config,
            registry: Arc::new(Mutex::new(registry)),
            metrics,
            system_metrics,
        }
    }
}
