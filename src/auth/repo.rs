use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db;
use crate::error::ApiError;

/// User record in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub password_hash: String,
    pub created_at: bson::DateTime,
}

impl User {
    fn collection(database: &Database) -> Collection<User> {
        database.collection(db::USERS)
    }

    pub async fn find_by_email(
        database: &Database,
        email: &str,
    ) -> Result<Option<User>, ApiError> {
        let user = Self::collection(database)
            .find_one(doc! { "email": email })
            .await?;
        Ok(user)
    }

    /// Insert a new user. The unique index on `email` makes the losing side
    /// of a concurrent registration fail here with a duplicate-key error.
    pub async fn create(
        database: &Database,
        email: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        let user = User {
            id: ObjectId::new(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: bson::DateTime::now(),
        };
        match Self::collection(database).insert_one(&user).await {
            Ok(_) => {
                info!(user_id = %user.id, email = %user.email, "user created");
                Ok(user)
            }
            Err(e) if db::is_duplicate_key(&e) => {
                Err(ApiError::Conflict("User already exists".into()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
