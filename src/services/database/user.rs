use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{engine::any::Any, sql::Datetime, Surreal};
use validator::Validate;

use crate::utils::crypto::generate_uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RefreshToken {
    pub token: String,
    pub expires_at: Datetime,
}

impl RefreshToken {
    pub fn new(token: String, expires_in: Duration) -> Self {
        let now: DateTime<Utc> = Utc::now();
        let expires: DateTime<Utc> = now + expires_in;

        RefreshToken {
            token,
            expires_at: Datetime::from(expires),
        }
    }
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
pub struct User {
    #[validate(email)]
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<RefreshToken>,
}

impl User {
    pub fn new(email: String) -> Self {
        User {
            email,
            refresh_token: None,
        }
    }
}

#[derive(Clone)]
pub struct UserQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> UserQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }
}

impl<'a> UserQuery<'a> {
    pub async fn create(&self, email: String) -> Result<Option<User>, surrealdb::Error> {
        let id = generate_uuid();
        let new_user = User::new(email);

        let user: Option<User> = self.db.create(("users", id)).content(new_user).await?;

        Ok(user)
    }

    pub async fn check_if_exists(&self, email: String) -> Result<bool, surrealdb::Error> {
        let query = r#"
            SELECT * FROM users
            WHERE email = $user_email
        "#;

        let mut response: surrealdb::Response =
            self.db.query(query).bind(("user_email", email)).await?;

        let result: Vec<User> = response.take(0)?;

        Ok(!result.is_empty())
    }

    pub async fn store_refresh_token(
        &self,
        email: String,
        refresh_token: RefreshToken,
    ) -> Result<(), surrealdb::Error> {
        let query = r#"
            UPDATE users
            SET refresh_token = $refresh_token
            WHERE email = $user_email
        "#;

        let mut result: surrealdb::Response = self
            .db
            .query(query)
            .bind(("refresh_token", refresh_token))
            .bind(("user_email", email))
            .await?;

        let affected: Vec<User> = result.take(0)?;

        if affected.is_empty() {
            return Err(surrealdb::Error::Api(
                surrealdb::error::Api::InvalidRequest(String::from(
                    "User with the given email doesn't exist",
                )),
            ));
        }

        Ok(())
    }

    pub async fn find_by_refresh_token(
        &self,
        token: String,
    ) -> Result<Option<User>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM users
            WHERE refresh_token.token = $refresh_token_value
                AND refresh_token.expires_at > time::now()
        "#;

        let mut response: surrealdb::Response =
            self.db.query(query).bind(("refresh_token_value", token)).await?;

        let result: Vec<User> = response.take(0)?;

        Ok(result.into_iter().next())
    }
}
