use serde::{Deserialize, Serialize};
use surrealdb::{engine::any::Any, Surreal};
use validator::Validate;

use crate::utils::crypto::generate_uuid;
use crate::utils::slug::slugify;
use crate::utils::validation::validate_slug_format;

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
pub struct Schema {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(custom(function = "validate_slug_format"))]
    pub slug: String,
    pub version: String,
    pub schema_type: String,
}

impl Schema {
    pub fn new(name: String, version: String, schema_type: String) -> Self {
        let slug = slugify(name.as_str());

        Schema {
            name,
            slug,
            version,
            schema_type,
        }
    }
}

#[derive(Clone)]
pub struct SchemaQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> SchemaQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }
}

impl<'a> SchemaQuery<'a> {
    pub async fn create(
        &self,
        name: String,
        version: String,
        schema_type: String,
    ) -> Result<Option<Schema>, surrealdb::Error> {
        let id = generate_uuid();
        let new_schema = Schema::new(name, version, schema_type);

        let schema: Option<Schema> = self.db.create(("schemas", id)).content(new_schema).await?;

        Ok(schema)
    }

    pub async fn find_by_slug(&self, slug: String) -> Result<Option<Schema>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM schemas
            WHERE slug = $schema_slug
        "#;

        let mut response: surrealdb::Response =
            self.db.query(query).bind(("schema_slug", slug)).await?;

        let result: Vec<Schema> = response.take(0)?;

        Ok(result.into_iter().next())
    }
}
