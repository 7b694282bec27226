use crate::database::{ContentDatabase, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Pool, Row as _, Sqlite, TypeInfo, ValueRef};
use std::str::FromStr;

pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

impl SqliteDatabase {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Builds a pool that opens its first connection on first use.
    ///
    /// File databases are opened read-only, this process never writes content.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self> {
        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid DATABASE_URL {}", database_url))?;

        if !is_in_memory(database_url) {
            options = options.read_only(true);
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl ContentDatabase for SqliteDatabase {
    async fn query(&self, sql: &str) -> Result<Vec<Row>> {
        let sqlite_rows = sqlx::query(sql).fetch_all(&self.pool).await?;

        let mut rows = Vec::with_capacity(sqlite_rows.len());
        for sqlite_row in &sqlite_rows {
            rows.push(decode_row(sqlite_row)?);
        }

        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;

        Ok(())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

// translate a sqlite row into a plain column -> value map
fn decode_row(sqlite_row: &SqliteRow) -> Result<Row> {
    let mut row = Row::new();

    for column in sqlite_row.columns() {
        let index = column.ordinal();

        // sqlite is dynamically typed: go by the storage class of the value, not the declared type
        let storage_class = {
            let raw = sqlite_row.try_get_raw(index)?;
            if raw.is_null() {
                None
            } else {
                Some(raw.type_info().name().to_string())
            }
        };

        let value = match storage_class.as_deref() {
            None => Value::Null,
            Some("INTEGER" | "BIGINT") => Value::from(sqlite_row.try_get::<i64, _>(index)?),
            Some("REAL") => Value::from(sqlite_row.try_get::<f64, _>(index)?),
            Some("BLOB") => Value::from(sqlite_row.try_get::<Vec<u8>, _>(index)?),
            Some(_) => Value::from(sqlite_row.try_get::<String, _>(index)?),
        };

        row.insert(column.name().to_string(), value);
    }

    Ok(row)
}
