//! Federated record search.
//!
//! One query fans out to every backend collection at once, plus a direct
//! lookup when the query is a prefixed record ID (`O54`). Each fetch degrades
//! to an empty bucket on failure, so a broken backend resource never fails the
//! whole search.

pub mod assemble;
pub mod dispatch;
pub mod matcher;
pub mod query;
pub mod resources;

use futures::future::join_all;

use shared_types::{EntityType, SearchResults};

use crate::backend::BackendClient;

pub use query::SearchQuery;

/// Run a search against every collection concurrently and merge the buckets.
pub async fn run_search(client: &BackendClient, query: &SearchQuery, token: &str) -> SearchResults {
    let buckets = EntityType::ALL.map(|entity| dispatch::fetch_bucket(client, entity, query, token));
    let exact = dispatch::fetch_exact(client, query.parsed_id(), token);

    let (buckets, exact) = tokio::join!(join_all(buckets), exact);

    assemble::assemble(buckets, exact)
}
