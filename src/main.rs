use db_init::errors::CommonError;
use db_init::setup;
use db_init::utils;
use dotenv::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CommonError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = setup::load_config();

    let database_layer = setup::setup_database(&config)
        .await
        .map_err(CommonError::Connection)?;

    info!("database client successfully initialized");

    database_layer
        .initialize_indexes(utils::indexes::all())
        .await
        .map_err(CommonError::Statement)?;

    info!(
        "index provisioning complete for namespace {} database {}",
        config.namespace, config.database
    );

    Ok(())
}
