use std::sync::Arc;

use bson::doc;
use mongodb::{options::IndexOptions, Database, IndexModel};

use crate::auth::repo::User;
use crate::config::AppConfig;
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.mongo_uri).await?;
        let state = Self { db, config };
        state.ensure_indexes().await?;
        Ok(state)
    }

    /// Email uniqueness is enforced by the store itself, not by
    /// check-then-insert; the index closes the concurrent-register race.
    async fn ensure_indexes(&self) -> anyhow::Result<()> {
        if self.config.read_only {
            return Ok(());
        }
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.db
            .collection::<User>(db::USERS)
            .create_index(index)
            .await?;
        Ok(())
    }
}
