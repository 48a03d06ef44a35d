//! Applies all pending schema migrations and exits.

use anyhow::Context;
use shop_catalog::{config, db, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config().context("failed to load configuration")?;
    logging::init_tracing(&cfg.log_level);

    let db_config = db::DbConfig::from(&cfg);
    let pool = db::establish_connection_with_config(&db_config)
        .await
        .context("failed to connect to the database")?;

    db::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    Ok(())
}
