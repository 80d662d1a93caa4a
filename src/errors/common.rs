use derive_more::Display;

#[derive(Debug, Display)]
pub enum CommonError {
    Connection(surrealdb::Error),
    Statement(surrealdb::Error),
}
