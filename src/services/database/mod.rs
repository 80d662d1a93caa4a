pub mod schema;
pub mod user;

use surrealdb::{
    engine::any::{self, Any},
    opt::auth::Root,
    Surreal,
};

#[derive(Clone)]
pub struct DatabaseQuery<'a> {
    #[allow(dead_code)]
    db: &'a Surreal<Any>,
    pub user: user::UserQuery<'a>,
    pub schema: schema::SchemaQuery<'a>,
}

#[allow(dead_code)]
#[derive(Clone)]
pub struct DatabaseLayer {
    pub username: String,
    password: String,
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub db: Surreal<Any>,
}

impl DatabaseLayer {
    pub async fn new(
        username: String,
        password: String,
        url: String,
        namespace: String,
        database: String,
    ) -> Result<Self, surrealdb::Error> {
        let db = any::connect(url.clone()).await?;

        // Embedded engines have no root credentials to sign in with.
        if !username.is_empty() {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(namespace.clone())
            .use_db(database.clone())
            .await?;

        Ok(Self {
            username,
            password,
            url,
            namespace,
            database,
            db,
        })
    }

    pub async fn initialize_indexes(&self, indexes: Vec<&str>) -> Result<(), surrealdb::Error> {
        for index_query in indexes {
            // Statement errors travel inside an Ok response; check() surfaces them.
            self.db.query(index_query).await?.check()?;
        }

        Ok(())
    }

    pub fn query(&self) -> DatabaseQuery {
        DatabaseQuery {
            db: &self.db,
            user: user::UserQuery::new(&self.db),
            schema: schema::SchemaQuery::new(&self.db),
        }
    }
}
