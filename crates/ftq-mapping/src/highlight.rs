//! Highlighting configuration.

use serde::{Serialize, Serializer};

use crate::request::SearchRequest;

/// Number of highlighted fragments returned for the content body.
pub const CONTENT_FRAGMENTS: u32 = 5;

/// Options for one highlighted field. Unset options use backend defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightField {
    /// Maximum number of fragments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_fragments: Option<u32>,
    /// Fragment ordering, e.g. `score`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Highlight section of a compiled query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpec {
    /// Highlighted fields, in order.
    #[serde(serialize_with = "serialize_fields")]
    pub fields: Vec<(String, HighlightField)>,
    /// Markup inserted before a match.
    pub pre_tags: Vec<String>,
    /// Markup inserted after a match.
    pub post_tags: Vec<String>,
}

/// Writes the field list as a JSON object.
fn serialize_fields<S: Serializer>(
    fields: &[(String, HighlightField)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(fields.iter().map(|(name, field)| (name, field)))
}

/// Highlights `content` by score plus every multi-part field, without markup.
pub fn highlight_spec(request: &SearchRequest) -> HighlightSpec {
    let content = HighlightField {
        number_of_fragments: Some(CONTENT_FRAGMENTS),
        order: Some("score".to_string()),
    };

    let mut fields = vec![("content".to_string(), content)];
    fields.extend(
        request
            .part_fields()
            .into_iter()
            .map(|field| (field, HighlightField::default())),
    );

    HighlightSpec {
        fields,
        pre_tags: vec![String::new()],
        post_tags: vec![String::new()],
    }
}
