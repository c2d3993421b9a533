use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::EntityType;

/// Matched backend records grouped by entity type. Records are passed through
/// untouched; every bucket is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub jobs: Vec<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub leads: Vec<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub job_seekers: Vec<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub organizations: Vec<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub tasks: Vec<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub hiring_managers: Vec<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub placements: Vec<Value>,
}

impl SearchResults {
    /// Fold `(entity, records)` pairs into a result set. A later pair for the
    /// same entity replaces the earlier one.
    pub fn from_buckets<I>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (EntityType, Vec<Value>)>,
    {
        buckets
            .into_iter()
            .fold(Self::default(), |mut acc, (entity, records)| {
                *acc.bucket_mut(entity) = records;
                acc
            })
    }

    pub fn bucket(&self, entity: EntityType) -> &[Value] {
        match entity {
            EntityType::Job => &self.jobs,
            EntityType::Lead => &self.leads,
            EntityType::JobSeeker => &self.job_seekers,
            EntityType::Organization => &self.organizations,
            EntityType::Task => &self.tasks,
            EntityType::HiringManager => &self.hiring_managers,
            EntityType::Placement => &self.placements,
        }
    }

    pub fn bucket_mut(&mut self, entity: EntityType) -> &mut Vec<Value> {
        match entity {
            EntityType::Job => &mut self.jobs,
            EntityType::Lead => &mut self.leads,
            EntityType::JobSeeker => &mut self.job_seekers,
            EntityType::Organization => &mut self.organizations,
            EntityType::Task => &mut self.tasks,
            EntityType::HiringManager => &mut self.hiring_managers,
            EntityType::Placement => &mut self.placements,
        }
    }

    pub fn total(&self) -> usize {
        EntityType::ALL.iter().map(|e| self.bucket(*e).len()).sum()
    }
}

/// Successful search response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: SearchResults,
}
