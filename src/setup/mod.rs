mod config;
mod database;

pub use config::{load_config, Config};
pub use database::setup_database;
