//! Relational record types.
//!
//! A record is an immutable snapshot of one row, fetched for a single sync
//! operation. The store normalizes values at the boundary: `in_stock` is a
//! true boolean (stored as TINYINT 0/1) and nullable text columns are
//! coalesced to empty strings, so downstream code never handles absence.

use chrono::{DateTime, Utc};

use crate::resource::ResourceType;

/// A row from the `books` table.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub in_stock: bool,
    pub isbn: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

/// A row from the `electronics` table.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicRecord {
    pub id: i64,
    pub name: String,
    pub manufacturer: String,
    pub price: f64,
    pub in_stock: bool,
    pub specs: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

/// A typed record, one variant per resource type.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Book(BookRecord),
    Electronic(ElectronicRecord),
}

impl Record {
    /// The resource type this record belongs to.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Record::Book(_) => ResourceType::Book,
            Record::Electronic(_) => ResourceType::Electronics,
        }
    }

    /// The numeric primary key of the underlying row.
    pub fn id(&self) -> i64 {
        match self {
            Record::Book(b) => b.id,
            Record::Electronic(e) => e.id,
        }
    }
}
