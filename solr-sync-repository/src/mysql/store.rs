//! MySQL record store implementation.
//!
//! This module provides the concrete implementation of `RecordStore` using
//! an sqlx connection pool. Value normalization happens here, at the
//! boundary: `in_stock` TINYINT flags become booleans and nullable text
//! columns are coalesced to empty strings in SQL, so the mapper never has
//! to special-case absence.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::StoreError;
use crate::interfaces::RecordStore;
use crate::mysql::config::StoreConfig;
use solr_sync_shared::{BookRecord, ElectronicRecord, Record, ResourceType};

const BOOK_QUERY: &str = "\
    SELECT id, title, author, genre, price, in_stock, isbn, \
           COALESCE(description, '') AS description, updated_at \
    FROM books \
    WHERE id = ?";

const ELECTRONIC_QUERY: &str = "\
    SELECT id, name, manufacturer, price, in_stock, \
           COALESCE(specs, '{}') AS specs, \
           COALESCE(description, '') AS description, updated_at \
    FROM electronics \
    WHERE id = ?";

/// MySQL-backed record store.
///
/// Owns a connection pool scoped to process lifetime. The pool is safe for
/// concurrent use; each query checks out a connection for its duration.
pub struct MySqlRecordStore {
    pool: MySqlPool,
}

impl MySqlRecordStore {
    /// Connect to MySQL and create the store.
    ///
    /// Establishes at least one connection up front so a misconfigured
    /// database fails at startup rather than on the first request.
    ///
    /// # Arguments
    ///
    /// * `config` - Host, port, credentials and database name
    ///
    /// # Returns
    ///
    /// * `Ok(MySqlRecordStore)` - A store with a live pool
    /// * `Err(StoreError)` - If the initial connection fails
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(25)
            .min_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(5 * 60))
            .max_lifetime(Duration::from_secs(30 * 60))
            .connect(&config.connection_url())
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connected to MySQL"
        );

        Ok(Self { pool })
    }

    /// Create a store from an existing pool. Used by integration tests.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Normalize a TINYINT availability flag to a boolean.
    fn in_stock_flag(raw: i8) -> bool {
        raw == 1
    }

    fn row_to_book(row: &MySqlRow) -> Result<BookRecord, StoreError> {
        Ok(BookRecord {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            genre: row.try_get("genre")?,
            price: row.try_get("price")?,
            in_stock: Self::in_stock_flag(row.try_get("in_stock")?),
            isbn: row.try_get("isbn")?,
            description: row.try_get("description")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn row_to_electronic(row: &MySqlRow) -> Result<ElectronicRecord, StoreError> {
        Ok(ElectronicRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            manufacturer: row.try_get("manufacturer")?,
            price: row.try_get("price")?,
            in_stock: Self::in_stock_flag(row.try_get("in_stock")?),
            specs: row.try_get("specs")?,
            description: row.try_get("description")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    /// The synthetic description written by `get_and_touch`.
    fn touch_description() -> String {
        format!(
            "Description added by solr-sync at {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

#[async_trait]
impl RecordStore for MySqlRecordStore {
    async fn get(&self, resource: ResourceType, id: i64) -> Result<Option<Record>, StoreError> {
        let query = match resource {
            ResourceType::Book => BOOK_QUERY,
            ResourceType::Electronics => ELECTRONIC_QUERY,
        };

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            debug!(resource = %resource, id = id, "Record not found");
            return Ok(None);
        };

        let record = match resource {
            ResourceType::Book => Record::Book(Self::row_to_book(&row)?),
            ResourceType::Electronics => Record::Electronic(Self::row_to_electronic(&row)?),
        };

        Ok(Some(record))
    }

    async fn get_and_touch(
        &self,
        resource: ResourceType,
        id: i64,
    ) -> Result<Option<Record>, StoreError> {
        let update = format!(
            "UPDATE {} SET description = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
            resource.table()
        );

        let result = sqlx::query(&update)
            .bind(Self::touch_description())
            .bind(id)
            .execute(&self.pool)
            .await?;

        // Zero affected rows means the record is absent; skip the re-read.
        if result.rows_affected() == 0 {
            debug!(resource = %resource, id = id, "Touch update matched no rows");
            return Ok(None);
        }

        // Re-read rather than trusting the update's input values. A vanished
        // row at this point is a partial failure, not a clean NotFound.
        match self.get(resource, id).await? {
            Some(record) => Ok(Some(record)),
            None => Err(StoreError::query(format!(
                "{} {} disappeared between touch update and re-read",
                resource, id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_stock_flag_normalization() {
        assert!(!MySqlRecordStore::in_stock_flag(0));
        assert!(MySqlRecordStore::in_stock_flag(1));
    }

    #[test]
    fn test_touch_description_format() {
        let description = MySqlRecordStore::touch_description();
        assert!(description.starts_with("Description added by solr-sync at "));
        // RFC 3339 UTC timestamp, e.g. "2024-01-01T00:00:00Z".
        assert!(description.ends_with('Z'));
    }

    #[test]
    fn test_queries_coalesce_nullable_columns() {
        assert!(BOOK_QUERY.contains("COALESCE(description, '')"));
        assert!(ELECTRONIC_QUERY.contains("COALESCE(specs, '{}')"));
        assert!(ELECTRONIC_QUERY.contains("COALESCE(description, '')"));
    }
}
