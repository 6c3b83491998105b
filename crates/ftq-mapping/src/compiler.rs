//! Query compilation entry points.

use ftq_config::{Config, ConfigError};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    compose::compose,
    dsl::{BoolQuery, Clause, Occur},
    error::CompileError,
    filter::filter_entries,
    highlight::{HighlightSpec, highlight_spec},
    request::{AccessContext, SearchRequest},
};

/// Document type tag of every compiled request.
pub const DOCUMENT_TYPE: &str = "standard";

/// Field excluded from returned documents.
const CONTENT_FIELD: &str = "content";

/// Supplies the backend index name queries are compiled against.
pub trait IndexResolver {
    /// Returns the index name, or a configuration error if none is set.
    fn elastic_index(&self) -> Result<String, ConfigError>;
}

impl<R: IndexResolver + ?Sized> IndexResolver for &R {
    fn elastic_index(&self) -> Result<String, ConfigError> {
        (**self).elastic_index()
    }
}

impl IndexResolver for Config {
    fn elastic_index(&self) -> Result<String, ConfigError> {
        Self::elastic_index(self).map(str::to_string)
    }
}

/// An index name fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIndex(pub String);

impl FixedIndex {
    /// Creates a resolver that always returns `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl IndexResolver for FixedIndex {
    fn elastic_index(&self) -> Result<String, ConfigError> {
        Ok(self.0.clone())
    }
}

/// A compiled search request, ready to send to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    /// Backend index.
    pub index: String,
    /// Document type, always [`DOCUMENT_TYPE`].
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Page size.
    pub size: u64,
    /// Offset of the first result.
    pub from: u64,
    /// Query body.
    pub body: SearchBody,
}

impl CompiledQuery {
    /// Returns the query as a JSON value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Body of a compiled search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchBody {
    /// Boolean clause tree.
    pub query: Clause,
    /// Highlighting configuration.
    pub highlight: HighlightSpec,
    /// Fields left out of returned documents.
    #[serde(rename = "_source")]
    pub source: SourceFilter,
}

/// Source field filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFilter {
    /// Excluded fields.
    pub excludes: Vec<String>,
}

/// A direct fetch of one document by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdLookupQuery {
    /// Backend index.
    pub index: String,
    /// Document type, always [`DOCUMENT_TYPE`].
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Composite id, `<provider>:<document>`.
    pub id: String,
}

impl IdLookupQuery {
    /// Returns the query as a JSON value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Compiles search requests into backend queries.
///
/// Compilation is pure: the same inputs always give the same output.
#[derive(Debug, Clone)]
pub struct QueryCompiler<R> {
    /// Source of the index name.
    resolver: R,
}

impl<R: IndexResolver> QueryCompiler<R> {
    /// Creates a compiler using `resolver` for the index name.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Compiles a search request for `provider_id`, visible to `access`.
    ///
    /// The textual clause goes under `bool.must` unless the search is the
    /// no-search sentinel; filters always go under `bool.filter`.
    ///
    /// The textual clause is `"must": [{"bool": {"must": [..], "should": [..],
    /// "must_not": [..]}}]`. Older transports wrapped that bool in one more
    /// single-element `bool.should`; the backend scores both shapes the same,
    /// so only byte-for-byte comparisons against that format will differ.
    pub fn compile_search_query(
        &self,
        request: &SearchRequest,
        access: &AccessContext,
        provider_id: &str,
    ) -> Result<CompiledQuery, CompileError> {
        let index = self.resolver.elastic_index()?;

        let mut query = BoolQuery::new();
        if request.has_text_search() {
            let contents = ftq_query::extract_contents(&request.search)?;
            debug!(terms = contents.len(), "composing textual clause");
            query.push(Occur::Must, compose(&contents, request));
        }

        let filters = filter_entries(request, access, provider_id);
        debug!(
            provider = provider_id,
            filters = filters.len(),
            "compiled search query"
        );
        query = query.with_group(Occur::Filter, filters);

        Ok(CompiledQuery {
            index,
            doc_type: DOCUMENT_TYPE.to_string(),
            size: request.size,
            from: request.offset(),
            body: SearchBody {
                query: query.into(),
                highlight: highlight_spec(request),
                source: SourceFilter {
                    excludes: vec![CONTENT_FIELD.to_string()],
                },
            },
        })
    }

    /// Builds a direct fetch of `document_id` from `provider_id`.
    pub fn compile_get_by_id_query(
        &self,
        provider_id: &str,
        document_id: &str,
    ) -> Result<IdLookupQuery, CompileError> {
        let index = self.resolver.elastic_index()?;
        debug!(provider = provider_id, document = document_id, "compiled id lookup");

        Ok(IdLookupQuery {
            index,
            doc_type: DOCUMENT_TYPE.to_string(),
            id: format!("{provider_id}:{document_id}"),
        })
    }
}
