use std::sync::Arc;

use premier_app::{app_bus::AppBus, config::Config};
use premier_db::{establish_connection_pool, run_migrations, uow::PostgresUnitOfWorkProvider};
use premier_types::{Result, errors::ApplicationError};
use premier_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let (config, app_bus) = setup_app().await?;
    let state = AppState::new(app_bus);

    WebRouter::serve(state, config.http_port).await
}

async fn setup_app() -> Result<(Arc<Config>, Arc<AppBus>), ApplicationError> {
    let config = Arc::new(Config::from_env());
    tracing::info!(
        filter_mode = %config.filter_mode,
        port = config.http_port,
        "Configuration loaded"
    );

    let db_pool = establish_connection_pool().await?;
    run_migrations(&db_pool).await?;
    tracing::info!("Database migrations applied.");

    let uow_provider = Arc::new(PostgresUnitOfWorkProvider::new(db_pool));
    let app_bus = Arc::new(AppBus::new(config.clone(), uow_provider));

    Ok((config, app_bus))
}
