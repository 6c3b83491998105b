//! Boolean query tree.
//!
//! [`Clause`] and [`BoolQuery`] model the subset of the backend query DSL that
//! compiled queries use. They serialize to the backend's JSON shape, e.g.
//! `{"term": {"provider": "files"}}` or `{"bool": {"should": [...]}}`.

use std::fmt;

use ftq_query::{MatchMode, Polarity};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Occurrence group of a boolean node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occur {
    /// Clauses that must match and contribute to the score.
    Must,
    /// Clauses of which any may match.
    Should,
    /// Clauses that must not match.
    MustNot,
    /// Clauses that must match without scoring.
    Filter,
    /// Any other group key, passed through unchanged.
    Other(String),
}

impl Occur {
    /// Returns the group key as written in the query DSL.
    pub fn key(&self) -> &str {
        match self {
            Self::Must => "must",
            Self::Should => "should",
            Self::MustNot => "must_not",
            Self::Filter => "filter",
            Self::Other(key) => key,
        }
    }
}

impl From<&Polarity> for Occur {
    fn from(polarity: &Polarity) -> Self {
        match polarity {
            Polarity::Must => Self::Must,
            Polarity::Should => Self::Should,
            Polarity::MustNot => Self::MustNot,
            Polarity::Other(key) if key == "filter" => Self::Filter,
            Polarity::Other(key) => Self::Other(key.clone()),
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One condition node of a compiled query.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Exact value match on an unanalyzed field.
    Term {
        /// Field name.
        field: String,
        /// Value to match.
        value: String,
    },
    /// Analyzed full-text match.
    Match {
        /// Phrase or prefix-term matching.
        mode: MatchMode,
        /// Field name.
        field: String,
        /// Text to match.
        text: String,
    },
    /// Wildcard pattern match (`*` and `?`).
    Wildcard {
        /// Field name.
        field: String,
        /// Wildcard pattern.
        pattern: String,
    },
    /// Regular expression match.
    Regexp {
        /// Field name.
        field: String,
        /// Regular expression.
        pattern: String,
    },
    /// Free-text query scored across several fields.
    QueryString {
        /// Fields to search.
        fields: Vec<String>,
        /// Query text.
        query: String,
    },
    /// Range on an orderable field; at least one bound is set.
    Range {
        /// Field name.
        field: String,
        /// Inclusive lower bound.
        gte: Option<String>,
        /// Inclusive upper bound.
        lte: Option<String>,
    },
    /// Nested boolean node.
    Bool(BoolQuery),
}

impl Clause {
    /// Creates a term clause.
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a full-text match clause.
    pub fn matching(mode: MatchMode, field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Match {
            mode,
            field: field.into(),
            text: text.into(),
        }
    }

    /// Creates a wildcard clause.
    pub fn wildcard(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Wildcard {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a regular expression clause.
    pub fn regexp(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Regexp {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a multi-field query string clause.
    pub fn query_string(fields: Vec<String>, query: impl Into<String>) -> Self {
        Self::QueryString {
            fields,
            query: query.into(),
        }
    }

    /// Creates a range clause with only a lower bound.
    pub fn range_gte(field: impl Into<String>, bound: impl Into<String>) -> Self {
        Self::Range {
            field: field.into(),
            gte: Some(bound.into()),
            lte: None,
        }
    }

    /// Creates a range clause with only an upper bound.
    pub fn range_lte(field: impl Into<String>, bound: impl Into<String>) -> Self {
        Self::Range {
            field: field.into(),
            gte: None,
            lte: Some(bound.into()),
        }
    }

    /// Returns the nested boolean node, if this is one.
    pub fn as_bool(&self) -> Option<&BoolQuery> {
        match self {
            Self::Bool(query) => Some(query),
            _ => None,
        }
    }

    /// Collects every field name referenced by this clause and its children.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    /// Recursive helper for [`Self::referenced_fields`].
    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Term { field, .. }
            | Self::Match { field, .. }
            | Self::Wildcard { field, .. }
            | Self::Regexp { field, .. }
            | Self::Range { field, .. } => out.push(field),
            Self::QueryString { fields, .. } => out.extend(fields.iter().map(String::as_str)),
            Self::Bool(query) => {
                for (_, clauses) in query.groups() {
                    for clause in clauses {
                        clause.collect_fields(out);
                    }
                }
            }
        }
    }
}

impl From<BoolQuery> for Clause {
    fn from(query: BoolQuery) -> Self {
        Self::Bool(query)
    }
}

/// Serializes as a single-entry JSON object.
struct Entry<'a, V: ?Sized>(&'a str, &'a V);

impl<V: Serialize + ?Sized> Serialize for Entry<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}

/// Body of a `query_string` clause.
#[derive(Serialize)]
struct QueryStringBody<'a> {
    /// Fields to search.
    fields: &'a [String],
    /// Query text.
    query: &'a str,
}

/// Bounds of a `range` clause.
#[derive(Serialize)]
struct RangeBody<'a> {
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    gte: Option<&'a str>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    lte: Option<&'a str>,
}

impl Serialize for Clause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Term { field, value } => Entry("term", &Entry(field, value)).serialize(serializer),
            Self::Match { mode, field, text } => {
                Entry(mode.key(), &Entry(field, text)).serialize(serializer)
            }
            Self::Wildcard { field, pattern } => {
                Entry("wildcard", &Entry(field, pattern)).serialize(serializer)
            }
            Self::Regexp { field, pattern } => {
                Entry("regexp", &Entry(field, pattern)).serialize(serializer)
            }
            Self::QueryString { fields, query } => {
                let body = QueryStringBody { fields, query };
                Entry("query_string", &body).serialize(serializer)
            }
            Self::Range { field, gte, lte } => {
                let body = RangeBody {
                    gte: gte.as_deref(),
                    lte: lte.as_deref(),
                };
                Entry("range", &Entry(field, &body)).serialize(serializer)
            }
            Self::Bool(query) => Entry("bool", query).serialize(serializer),
        }
    }
}

/// A boolean node: occurrence groups in insertion order.
///
/// A group may be present with no clauses; it still serializes (as `[]`),
/// which for `should` yields a node that matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    /// Groups keyed by occurrence, first-seen order.
    groups: Vec<(Occur, Vec<Clause>)>,
}

impl BoolQuery {
    /// Creates an empty boolean node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause to the given group, creating the group if needed.
    pub fn push(&mut self, occur: Occur, clause: Clause) {
        self.group_mut(occur).push(clause);
    }

    /// Appends clauses to the given group, creating the group even if `clauses` is empty.
    pub fn with_group(mut self, occur: Occur, clauses: Vec<Clause>) -> Self {
        self.group_mut(occur).extend(clauses);
        self
    }

    /// Returns the clauses of a group, if the group exists.
    pub fn group(&self, occur: &Occur) -> Option<&[Clause]> {
        self.groups
            .iter()
            .find(|(key, _)| key == occur)
            .map(|(_, clauses)| clauses.as_slice())
    }

    /// Iterates over groups in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = (&Occur, &[Clause])> {
        self.groups
            .iter()
            .map(|(occur, clauses)| (occur, clauses.as_slice()))
    }

    /// Returns true if the node has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the group for `occur`, inserting an empty one at the end if missing.
    fn group_mut(&mut self, occur: Occur) -> &mut Vec<Clause> {
        let idx = match self.groups.iter().position(|(key, _)| *key == occur) {
            Some(idx) => idx,
            None => {
                self.groups.push((occur, Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }
}

impl Serialize for BoolQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.groups
                .iter()
                .map(|(occur, clauses)| (occur.key(), clauses)),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn term_serializes() {
        let clause = Clause::term("provider", "files");
        assert_eq!(
            serde_json::to_value(&clause).unwrap(),
            json!({"term": {"provider": "files"}})
        );
    }

    #[test]
    fn match_uses_mode_key() {
        let phrase = Clause::matching(MatchMode::Phrase, "title", "big world");
        let prefix = Clause::matching(MatchMode::FuzzyTerm, "title", "big");
        assert_eq!(
            serde_json::to_value(&phrase).unwrap(),
            json!({"match_phrase": {"title": "big world"}})
        );
        assert_eq!(
            serde_json::to_value(&prefix).unwrap(),
            json!({"match_phrase_prefix": {"title": "big"}})
        );
    }

    #[test]
    fn query_string_serializes() {
        let clause = Clause::query_string(vec!["parts.a".into(), "parts.b".into()], "x");
        assert_eq!(
            serde_json::to_value(&clause).unwrap(),
            json!({"query_string": {"fields": ["parts.a", "parts.b"], "query": "x"}})
        );
    }

    #[test]
    fn range_skips_missing_bound() {
        assert_eq!(
            serde_json::to_value(Clause::range_gte("date", "10")).unwrap(),
            json!({"range": {"date": {"gte": "10"}}})
        );
        assert_eq!(
            serde_json::to_value(Clause::range_lte("date", "20")).unwrap(),
            json!({"range": {"date": {"lte": "20"}}})
        );
    }

    #[test]
    fn bool_keeps_group_order_and_empty_groups() {
        let mut query = BoolQuery::new().with_group(Occur::Should, vec![]);
        query.push(Occur::MustNot, Clause::term("a", "1"));
        query.push(Occur::Other("boost_group".into()), Clause::term("b", "2"));
        query.push(Occur::MustNot, Clause::term("c", "3"));

        let value = serde_json::to_value(Clause::from(query.clone())).unwrap();
        assert_eq!(
            value,
            json!({"bool": {
                "should": [],
                "must_not": [{"term": {"a": "1"}}, {"term": {"c": "3"}}],
                "boost_group": [{"term": {"b": "2"}}],
            }})
        );

        let keys: Vec<&str> = query.groups().map(|(occur, _)| occur.key()).collect();
        assert_eq!(keys, vec!["should", "must_not", "boost_group"]);
    }

    #[test]
    fn group_lookup() {
        let query = BoolQuery::new().with_group(Occur::Filter, vec![Clause::term("a", "b")]);
        assert_eq!(query.group(&Occur::Filter).map(<[Clause]>::len), Some(1));
        assert!(query.group(&Occur::Must).is_none());
        assert!(BoolQuery::new().is_empty());
    }

    #[test]
    fn referenced_fields_walks_nested_nodes() {
        let inner = BoolQuery::new().with_group(
            Occur::Should,
            vec![
                Clause::wildcard("name", "*.pdf"),
                Clause::query_string(vec!["parts.x".into()], "q"),
            ],
        );
        let outer = BoolQuery::new().with_group(
            Occur::Must,
            vec![Clause::term("owner", "alice"), inner.into()],
        );
        assert_eq!(
            Clause::from(outer).referenced_fields(),
            vec!["owner", "name", "parts.x"]
        );
    }

    #[test]
    fn occur_from_polarity() {
        assert_eq!(Occur::from(&Polarity::Must), Occur::Must);
        assert_eq!(Occur::from(&Polarity::MustNot), Occur::MustNot);
        assert_eq!(Occur::from(&Polarity::Other("filter".into())), Occur::Filter);
        assert_eq!(
            Occur::from(&Polarity::Other("x".into())).key(),
            "x"
        );
    }
}
