//! Error types for the repository layer.

mod solr_error;
mod store_error;

pub use solr_error::SolrError;
pub use store_error::StoreError;
