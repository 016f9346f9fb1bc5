use std::{str::FromStr, sync::Arc, time::Duration};

use common::env_config::Config;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

pub mod invoice;
pub mod store;
pub mod user;

pub mod models {
    pub mod invoice;
    pub mod user;
}

pub mod dtos {
    pub mod invoice;
}

/// Opens the dashboard pool and brings the schema up to date.
///
/// The database named in `DATABASE_URL` must already exist. Production
/// connections require TLS.
pub async fn setup(config: &Config) -> Result<Arc<PgPool>, Box<dyn std::error::Error>> {
    let mut options = PgConnectOptions::from_str(&config.database_url)?;
    if config.is_production() {
        options = options.ssl_mode(PgSslMode::Require);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;
    log::info!(
        "Database pool ready (max {} connections)",
        config.db_max_connections
    );

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}
