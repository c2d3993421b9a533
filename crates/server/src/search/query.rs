use shared_types::RecordId;

/// A trimmed, non-empty search query split into terms, plus the record ID it
/// names when it looks like one (`O54`, `js 12`).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    text: String,
    needles: Vec<String>,
    parsed_id: Option<RecordId>,
}

impl SearchQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let needles = text.split_whitespace().map(str::to_lowercase).collect();

        Some(Self {
            text: text.to_string(),
            needles,
            parsed_id: RecordId::parse(text),
        })
    }

    /// The trimmed query as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased whitespace-separated terms used for case-insensitive matching.
    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    pub fn parsed_id(&self) -> Option<RecordId> {
        self.parsed_id
    }
}
