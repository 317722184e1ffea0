use crate::config::Config;
use crate::db::connection::{DbPool, ensure_schema, init_db};
use tokio::time::{Duration, interval};
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}

impl AppState {
    /// Connects the pool and bootstraps the schema. Both must complete
    /// before the listener starts accepting requests.
    pub async fn new(config: &Config) -> Result<Self, sqlx::Error> {
        let db = init_db(config).await?;
        ensure_schema(&db).await?;

        let db_clone = db.clone();
        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                match db_clone.acquire().await {
                    Ok(conn) => {
                        drop(conn);
                    }
                    Err(e) => {
                        error!("Database connection health check failed: {}", e);
                    }
                }
            }
        });

        Ok(AppState { db })
    }
}
