use serde_json::Value;

use shared_types::{EntityType, SearchResults};

use super::dispatch::ExactMatch;
use super::matcher::numeric_id;

/// Reduce the per-entity buckets into one result set, then put the exact-ID
/// record at the front of its bucket unless a record with that ID is
/// already there.
pub fn assemble<I>(buckets: I, exact: Option<ExactMatch>) -> SearchResults
where
    I: IntoIterator<Item = (EntityType, Vec<Value>)>,
{
    let results = SearchResults::from_buckets(buckets);
    match exact {
        Some(exact) => with_exact(results, exact),
        None => results,
    }
}

fn with_exact(mut results: SearchResults, exact: ExactMatch) -> SearchResults {
    let bucket = results.bucket_mut(exact.id.entity);
    let present = bucket
        .iter()
        .any(|record| record.get("id").and_then(numeric_id) == Some(exact.id.id));

    if !present {
        bucket.insert(0, exact.record);
    }
    results
}
