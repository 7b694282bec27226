use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

/// One record as returned by the database: column name -> value, in column order.
pub type Row = serde_json::Map<String, serde_json::Value>;

// the only thing the app needs from a database is "run this SQL, give me the rows"
// db specific implementations live next to this file, "sqlite.rs" for now
#[async_trait]
pub trait ContentDatabase: Send + Sync {
    async fn query(&self, sql: &str) -> Result<Vec<Row>>;

    // cheap round trip used by the health route
    async fn ping(&self) -> Result<()>;
}
