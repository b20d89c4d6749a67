//! Record store error types.

use thiserror::Error;

/// Errors that can occur while querying the relational store.
///
/// Absence of a record is not an error; store operations report it as
/// `Ok(None)` so callers can distinguish "no such record" from "store
/// unavailable".
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to establish or check out a connection.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A query failed to execute or its result could not be decoded.
    #[error("Query error: {0}")]
    QueryError(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError(err.to_string())
            }
            other => Self::QueryError(other.to_string()),
        }
    }
}
