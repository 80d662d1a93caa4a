use std::env;

#[derive(Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub url: String,
    pub namespace: String,
    pub database: String,
}

pub fn load_config() -> Config {
    Config {
        username: env::var("DATABASE_USER").unwrap_or_else(|_| String::from("root")),
        password: env::var("DATABASE_PASSWORD").unwrap_or_else(|_| String::from("root")),
        url: env::var("DATABASE_URL").unwrap_or_else(|_| String::from("ws://127.0.0.1:8000")),
        namespace: env::var("DATABASE_NAMESPACE").unwrap_or_else(|_| String::from("aggregator")),
        database: env::var("DATABASE_NAME").unwrap_or_else(|_| String::from("aggregator")),
    }
}
