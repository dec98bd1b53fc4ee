use bson::{doc, oid::ObjectId, Document};
use futures::stream::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db;
use crate::error::ApiError;
use crate::receipts::cuisine::Cuisine;

/// Receipt record in the `receipts` collection, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub name: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub youtube_link: String,
    pub created_at: bson::DateTime,
}

impl Receipt {
    fn collection(database: &Database) -> Collection<Receipt> {
        database.collection(db::RECEIPTS)
    }

    pub async fn create(
        database: &Database,
        owner: ObjectId,
        name: String,
        cuisine: Cuisine,
        ingredients: Vec<String>,
        youtube_link: String,
    ) -> Result<ObjectId, ApiError> {
        let receipt = Receipt {
            id: ObjectId::new(),
            user_id: owner,
            name,
            cuisine: cuisine.to_string(),
            ingredients,
            youtube_link,
            created_at: bson::DateTime::now(),
        };
        Self::collection(database).insert_one(&receipt).await?;
        info!(receipt_id = %receipt.id, user_id = %owner, "receipt created");
        Ok(receipt.id)
    }

    /// Newest receipts for one owner, `created_at` descending.
    pub async fn list_recent(
        database: &Database,
        owner: ObjectId,
        limit: i64,
    ) -> Result<Vec<Receipt>, ApiError> {
        let receipts = Self::collection(database)
            .find(doc! { "user_id": owner })
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(receipts)
    }

    /// Apply a `$set` update. The filter carries both `_id` and `user_id`,
    /// so a receipt owned by someone else is indistinguishable from a
    /// missing one.
    pub async fn update(
        database: &Database,
        owner: ObjectId,
        id: ObjectId,
        updates: Document,
    ) -> Result<(), ApiError> {
        let filter = doc! { "_id": id, "user_id": owner };
        let existing = Self::collection(database)
            .find_one(filter.clone())
            .await?;
        if existing.is_none() {
            return Err(ApiError::NotFound("Receipt not found".into()));
        }
        // An empty body is a no-op that still answers 200.
        if !updates.is_empty() {
            Self::collection(database)
                .update_one(filter, doc! { "$set": updates })
                .await?;
            info!(receipt_id = %id, user_id = %owner, "receipt updated");
        }
        Ok(())
    }

    /// Same ownership-as-existence rule as `update`.
    pub async fn delete(
        database: &Database,
        owner: ObjectId,
        id: ObjectId,
    ) -> Result<(), ApiError> {
        let result = Self::collection(database)
            .delete_one(doc! { "_id": id, "user_id": owner })
            .await?;
        if result.deleted_count == 0 {
            return Err(ApiError::NotFound("Receipt not found".into()));
        }
        info!(receipt_id = %id, user_id = %owner, "receipt deleted");
        Ok(())
    }
}
