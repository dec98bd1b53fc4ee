use anyhow::Context;
use bson::doc;
use mongodb::{Client, Database};

pub const DB_NAME: &str = "dishlab";
pub const USERS: &str = "users";
pub const RECEIPTS: &str = "receipts";

pub async fn connect(uri: &str) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .context("connect to mongodb")?;
    Ok(client.database(DB_NAME))
}

/// Round-trip to the store, used by the readiness probe.
pub async fn ping(db: &Database) -> mongodb::error::Result<()> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// E11000: the unique index rejected the insert.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(
            mongodb::error::WriteError { code: 11000, .. }
        ))
    )
}
