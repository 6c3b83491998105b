//! Compiles search requests into backend boolean queries.
//!
//! A [`SearchRequest`] and the viewer's [`AccessContext`] go in; a
//! [`CompiledQuery`] comes out, serializable to the backend's JSON query DSL:
//!
//! ```json
//! {
//!   "index": "nextcloud", "type": "standard", "size": 20, "from": 0,
//!   "body": {
//!     "query": {"bool": {"must": [...], "filter": [...]}},
//!     "highlight": {...},
//!     "_source": {"excludes": ["content"]}
//!   }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use ftq_mapping::{AccessContext, FixedIndex, QueryCompiler, SearchRequest};
//!
//! let compiler = QueryCompiler::new(FixedIndex::new("nextcloud"));
//! let request = SearchRequest::new("+rust \"error handling\"");
//! let compiled = compiler
//!     .compile_search_query(&request, &AccessContext::new("alice"), "files")
//!     .unwrap();
//!
//! let json = compiled.to_json();
//! assert_eq!(json["type"], "standard");
//! assert_eq!(
//!     json["body"]["query"]["bool"]["filter"][0],
//!     serde_json::json!({"bool": {"must": [{"term": {"provider": "files"}}]}})
//! );
//! ```

#![warn(missing_docs)]

mod access;
mod compiler;
mod compose;
mod dsl;
mod error;
mod fanout;
mod filter;
mod highlight;
pub mod legacy;
mod request;

pub use access::{EVERYONE, access_clauses};
pub use compiler::{
    CompiledQuery, DOCUMENT_TYPE, FixedIndex, IdLookupQuery, IndexResolver, QueryCompiler,
    SearchBody, SourceFilter,
};
pub use compose::compose;
pub use dsl::{BoolQuery, Clause, Occur};
pub use error::CompileError;
pub use fanout::{DEFAULT_FIELDS, fanout};
pub use filter::{
    access_filter, filter_entries, provider_filter, regex_filters, tag_filter, wildcard_filters,
};
pub use highlight::{CONTENT_FRAGMENTS, HighlightField, HighlightSpec, highlight_spec};
pub use request::{
    AccessContext, FilterEntry, FilterGroup, LEGACY_INFO_FIELD, NO_SEARCH, PARTS_PREFIX,
    SearchRequest,
};
