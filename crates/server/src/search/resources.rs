use serde_json::Value;

use shared_types::EntityType;

/// How one backend collection is unwrapped and which record fields the text
/// matcher looks at.
#[derive(Debug)]
pub struct Resource {
    pub entity: EntityType,
    /// Candidate keys holding the record array, tried in order.
    pub list_keys: &'static [&'static str],
    /// Snake_case record fields checked for each search term.
    pub search_fields: &'static [&'static str],
}

/// Declared in `EntityType` discriminant order.
static RESOURCES: [Resource; 7] = [
    Resource {
        entity: EntityType::Job,
        list_keys: &["jobs"],
        search_fields: &[
            "job_title",
            "title",
            "company_name",
            "organization_name",
            "location",
            "description",
            "id",
        ],
    },
    Resource {
        entity: EntityType::Lead,
        list_keys: &["leads"],
        search_fields: &["name", "first_name", "last_name", "company_name", "email", "phone", "id"],
    },
    Resource {
        entity: EntityType::JobSeeker,
        list_keys: &["jobSeekers", "job_seekers"],
        search_fields: &["first_name", "last_name", "name", "email", "phone", "title", "id"],
    },
    Resource {
        entity: EntityType::Organization,
        list_keys: &["organizations"],
        search_fields: &["name", "website", "phone", "address", "overview", "id"],
    },
    Resource {
        entity: EntityType::Task,
        list_keys: &["tasks"],
        search_fields: &["title", "task_title", "description", "notes", "id"],
    },
    Resource {
        entity: EntityType::HiringManager,
        list_keys: &["hiringManagers", "hiring_managers"],
        search_fields: &[
            "name",
            "first_name",
            "last_name",
            "email",
            "phone",
            "organization_name",
            "id",
        ],
    },
    Resource {
        entity: EntityType::Placement,
        list_keys: &["placements"],
        search_fields: &["job_title", "jobSeekerName", "job_seeker_name", "status", "id"],
    },
];

/// Keys a single-record response may nest the record under, in priority
/// order. The order is fixed and independent of the requested type.
const RECORD_KEYS: [&str; 7] = [
    "organization",
    "job",
    "lead",
    "jobSeeker",
    "task",
    "hiringManager",
    "placement",
];

pub fn resource(entity: EntityType) -> &'static Resource {
    &RESOURCES[entity as usize]
}

/// Pull the record array out of a collection response: the first candidate
/// key holding an array, else the body itself when it is an array, else
/// nothing.
pub fn unwrap_collection(entity: EntityType, body: Value) -> Vec<Value> {
    let keys = resource(entity).list_keys;

    match body {
        Value::Array(records) => records,
        Value::Object(mut map) => keys
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Pull one record out of a single-item response, falling back to the raw
/// body. A `null` body means no record.
pub fn unwrap_record(body: Value) -> Option<Value> {
    match body {
        Value::Null => None,
        Value::Object(mut map) => {
            let key = RECORD_KEYS
                .iter()
                .find(|key| map.get(**key).is_some_and(|v| !v.is_null()));
            match key {
                Some(key) => map.remove(*key),
                None => Some(Value::Object(map)),
            }
        }
        other => Some(other),
    }
}
