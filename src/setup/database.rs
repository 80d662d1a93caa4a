use crate::services::database::DatabaseLayer;
use crate::setup::Config;

pub async fn setup_database(config: &Config) -> surrealdb::Result<DatabaseLayer> {
    DatabaseLayer::new(
        config.username.clone(),
        config.password.clone(),
        config.url.clone(),
        config.namespace.clone(),
        config.database.clone(),
    )
    .await
}
