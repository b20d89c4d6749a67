//! MySQL implementation of the record store.

mod config;
mod store;

pub use config::StoreConfig;
pub use store::MySqlRecordStore;
