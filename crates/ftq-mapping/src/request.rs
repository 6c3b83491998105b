//! Compilation inputs: the search request and the viewer's access context.

use serde::{Deserialize, Serialize};

/// Search string meaning "no text search": only filters apply.
pub const NO_SEARCH: &str = ":null";

/// Namespace prefix of multi-part fields.
pub const PARTS_PREFIX: &str = "parts.";

/// Reserved regex-filter field carrying a legacy structured payload.
pub const LEGACY_INFO_FIELD: &str = "info_msg";

/// One `field -> pattern` entry of a wildcard or regex filter group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEntry {
    /// Field to match.
    pub field: String,
    /// Wildcard pattern, regular expression, or legacy payload.
    pub pattern: String,
}

impl FilterEntry {
    /// Creates a filter entry.
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Returns true if this entry carries a legacy payload rather than a pattern.
    pub fn is_legacy_info(&self) -> bool {
        self.field == LEGACY_INFO_FIELD
    }
}

/// A group of filter entries; entries within a group are alternatives.
pub type FilterGroup = Vec<FilterEntry>;

/// A user-issued search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Free-text search string, or [`NO_SEARCH`].
    pub search: String,
    /// 1-based page number.
    pub page: u64,
    /// Results per page.
    pub size: u64,
    /// Extra fields searched alongside `content` and `title`.
    pub fields: Vec<String>,
    /// Field allow-list; empty means every field is allowed.
    pub limit_fields: Vec<String>,
    /// Fields searched with a `*word*` wildcard.
    pub wildcard_fields: Vec<String>,
    /// Multi-part names, searched and highlighted as `parts.<name>`.
    pub parts: Vec<String>,
    /// Meta-tags; a document matches if it has any of them.
    pub meta_tags: Vec<String>,
    /// Sub-tags; a document must have all of them.
    pub sub_tags: Vec<String>,
    /// Wildcard filter groups.
    pub wildcard_filters: Vec<FilterGroup>,
    /// Regex filter groups, possibly carrying legacy payload entries.
    pub regex_filters: Vec<FilterGroup>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search: NO_SEARCH.to_string(),
            page: 1,
            size: 20,
            fields: Vec::new(),
            limit_fields: Vec::new(),
            wildcard_fields: Vec::new(),
            parts: Vec::new(),
            meta_tags: Vec::new(),
            sub_tags: Vec::new(),
            wildcard_filters: Vec::new(),
            regex_filters: Vec::new(),
        }
    }
}

impl SearchRequest {
    /// Creates a request for the given search string with default paging.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Returns false when the search string is the [`NO_SEARCH`] sentinel.
    pub fn has_text_search(&self) -> bool {
        self.search != NO_SEARCH
    }

    /// Returns the offset of the first result, `(page - 1) * size`.
    ///
    /// Page 0 is treated as page 1.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }

    /// Returns the multi-part field names, `parts.<name>` in request order.
    pub fn part_fields(&self) -> Vec<String> {
        self.parts
            .iter()
            .map(|part| format!("{PARTS_PREFIX}{part}"))
            .collect()
    }

    /// Returns true if `field` passes the allow-list.
    pub fn allows_field(&self, field: &str) -> bool {
        self.limit_fields.is_empty() || self.limit_fields.iter().any(|f| f == field)
    }
}

/// Who is searching, used to restrict results to visible documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessContext {
    /// Viewer identity.
    pub viewer: String,
    /// Groups the viewer belongs to.
    pub groups: Vec<String>,
    /// Circles the viewer belongs to.
    pub circles: Vec<String>,
}

impl AccessContext {
    /// Creates an access context with no group or circle memberships.
    pub fn new(viewer: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
            ..Self::default()
        }
    }
}
