use serde::{Deserialize, Serialize};
use std::fmt;

/// The record kinds the dashboard works with. Each maps to one backend
/// collection and one search result bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Job,
    Lead,
    JobSeeker,
    Organization,
    Task,
    HiringManager,
    Placement,
}

impl EntityType {
    /// Every entity type, in result-bucket order.
    pub const ALL: [EntityType; 7] = [
        EntityType::Job,
        EntityType::Lead,
        EntityType::JobSeeker,
        EntityType::Organization,
        EntityType::Task,
        EntityType::HiringManager,
        EntityType::Placement,
    ];

    /// Display prefix used in record IDs such as `O54` or `JS12`.
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityType::Job => "J",
            EntityType::Lead => "L",
            EntityType::JobSeeker => "JS",
            EntityType::Organization => "O",
            EntityType::Task => "T",
            EntityType::HiringManager => "HM",
            EntityType::Placement => "P",
        }
    }

    /// Plural key of the result bucket (also the backend's collection key).
    pub fn bucket(&self) -> &'static str {
        match self {
            EntityType::Job => "jobs",
            EntityType::Lead => "leads",
            EntityType::JobSeeker => "jobSeekers",
            EntityType::Organization => "organizations",
            EntityType::Task => "tasks",
            EntityType::HiringManager => "hiringManagers",
            EntityType::Placement => "placements",
        }
    }

    /// Key the backend nests a single record under.
    pub fn singular_key(&self) -> &'static str {
        match self {
            EntityType::Job => "job",
            EntityType::Lead => "lead",
            EntityType::JobSeeker => "jobSeeker",
            EntityType::Organization => "organization",
            EntityType::Task => "task",
            EntityType::HiringManager => "hiringManager",
            EntityType::Placement => "placement",
        }
    }

    /// Backend collection path below `/api/`.
    pub fn resource_path(&self) -> &'static str {
        match self {
            EntityType::Job => "jobs",
            EntityType::Lead => "leads",
            EntityType::JobSeeker => "job-seekers",
            EntityType::Organization => "organizations",
            EntityType::Task => "tasks",
            EntityType::HiringManager => "hiring-managers",
            EntityType::Placement => "placements",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular_key())
    }
}

/// Prefixes in match order. Two-letter prefixes come first so `JS12` is a
/// job seeker rather than an unparseable job ID.
const PREFIX_ORDER: [EntityType; 7] = [
    EntityType::JobSeeker,
    EntityType::HiringManager,
    EntityType::Job,
    EntityType::Lead,
    EntityType::Organization,
    EntityType::Task,
    EntityType::Placement,
];

/// A typed record reference such as `O54` (organization #54).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecordId {
    #[serde(rename = "type")]
    pub entity: EntityType,
    pub id: i64,
}

impl RecordId {
    pub fn new(entity: EntityType, id: i64) -> Self {
        Self { entity, id }
    }

    /// Parse a display ID. Prefixes are case-insensitive and may be followed
    /// by whitespace before the number (`O54`, `o 54`). Returns `None` for
    /// anything that is not exactly a known prefix plus a non-negative integer.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_ascii_uppercase();

        for entity in PREFIX_ORDER {
            let Some(rest) = upper.strip_prefix(entity.prefix()) else {
                continue;
            };
            let digits = rest.trim_start();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            if let Ok(id) = digits.parse::<i64>() {
                return Some(Self { entity, id });
            }
        }

        None
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.entity.prefix(), self.id)
    }
}
