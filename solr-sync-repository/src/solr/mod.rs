//! Solr implementation of the search engine client.

mod client;
mod response;

pub use client::SolrClient;
