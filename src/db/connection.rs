use crate::config::Config;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::time::Duration;

pub type DbPool = Pool<Postgres>;

/// Builds the bounded connection pool. Excess acquires queue until
/// `db_acquire_timeout_secs` elapses, then fail with `PoolTimedOut`.
pub async fn init_db(config: &Config) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::new()
        .username(&config.db_user)
        .password(&config.db_pass)
        .database(&config.db_name);

    if let Some(socket) = &config.db_socket_path {
        options = options.socket(socket);
    } else if let Some(host) = &config.db_host {
        options = options.host(host).port(config.db_port);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_pool_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Idempotent schema bootstrap. Runs after the pool connects and before the
/// listener binds; any error here is fatal to startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS votes (
            vote_id BIGSERIAL PRIMARY KEY,
            time_cast TIMESTAMPTZ NOT NULL,
            candidate CHAR(6) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
