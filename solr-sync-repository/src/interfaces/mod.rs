//! Trait definitions for the repository layer.
//!
//! These traits abstract the two outbound dependencies so the pipeline can
//! be tested against substitutable fakes.

mod record_store;
mod search_engine_client;

pub use record_store::RecordStore;
pub use search_engine_client::SearchEngineClient;
