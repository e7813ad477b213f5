use std::sync::Arc;

use common::{
    guidance::service::GuidanceService,
    storage::{db::SurrealDbClient, types::guru::DEFAULT_GURUS},
    utils::config::AppConfig,
};

#[derive(Clone)]
pub struct ApiState {
    pub db: Arc<SurrealDbClient>,
    pub config: AppConfig,
    pub guidance: GuidanceService<SurrealDbClient>,
}

impl ApiState {
    pub async fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let surreal_db_client = Arc::new(
            SurrealDbClient::new(
                &config.surrealdb_address,
                &config.surrealdb_username,
                &config.surrealdb_password,
                &config.surrealdb_namespace,
                &config.surrealdb_database,
            )
            .await?,
        );

        surreal_db_client.ensure_initialized().await?;

        Ok(Self::with_client(surreal_db_client, config.clone()))
    }

    /// Build state around an existing client. Lets tests run against the
    /// in-memory engine.
    pub fn with_client(db: Arc<SurrealDbClient>, config: AppConfig) -> Self {
        let guidance = GuidanceService::new(db.clone(), &DEFAULT_GURUS);

        Self {
            db,
            config,
            guidance,
        }
    }
}
