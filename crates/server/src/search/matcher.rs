use serde_json::Value;

use shared_types::EntityType;

use super::query::SearchQuery;
use super::resources;

/// Decides which backend records belong in a result bucket.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'q> {
    query: &'q SearchQuery,
}

impl<'q> Matcher<'q> {
    pub fn new(query: &'q SearchQuery) -> Self {
        Self { query }
    }

    /// A record is kept when its ID matches or every term appears in one of
    /// the entity's search fields.
    pub fn matches(&self, record: &Value, entity: EntityType) -> bool {
        self.matches_id(record.get("id"), entity)
            || self.matches_all_terms(record, resources::resource(entity).search_fields)
    }

    /// True when the query names this exact record (`O54` against
    /// organization 54), or every term is a substring of the record's ID.
    /// Records without an ID never match here.
    pub fn matches_id(&self, id: Option<&Value>, entity: EntityType) -> bool {
        let Some(id) = id.filter(|v| !v.is_null()) else {
            return false;
        };

        if let Some(parsed) = self.query.parsed_id() {
            if parsed.entity == entity && numeric_id(id) == Some(parsed.id) {
                return true;
            }
        }

        let needles = self.query.needles();
        if needles.is_empty() {
            return false;
        }
        let id_text = value_text(Some(id)).to_lowercase();
        needles.iter().all(|needle| id_text.contains(needle.as_str()))
    }

    /// True iff every term is a case-insensitive substring of at least one of
    /// `fields`. Missing and `null` fields read as empty. Zero terms never
    /// match.
    pub fn matches_all_terms(&self, record: &Value, fields: &[&str]) -> bool {
        let needles = self.query.needles();
        if needles.is_empty() {
            return false;
        }

        let haystacks: Vec<String> = fields
            .iter()
            .map(|field| value_text(record.get(*field)).to_lowercase())
            .collect();

        needles
            .iter()
            .all(|needle| haystacks.iter().any(|h| h.contains(needle.as_str())))
    }
}

/// Coerce a record ID to a number: integers as-is, integral floats, and
/// numeric strings. Anything else has no numeric ID.
pub fn numeric_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Text of a scalar field. Missing, `null`, arrays and objects read as empty.
fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
