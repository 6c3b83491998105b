//! Field fanout.
//!
//! Expands one query term into a disjunction over every searchable field the
//! request allows.

use ftq_query::QueryContent;

use crate::{
    dsl::{BoolQuery, Clause, Occur},
    request::SearchRequest,
};

/// Fields every term is matched against, ahead of the request's own fields.
pub const DEFAULT_FIELDS: [&str; 2] = ["content", "title"];

/// Builds `{bool: {should: [...]}}` matching `content` in any allowed field.
///
/// - `content`, `title` and the request's fields get a match clause using the
///   term's match mode
/// - wildcard fields get a `*word*` wildcard clause
/// - allowed `parts.*` fields share one `query_string` clause
///
/// If the allow-list excludes every field, the result is `{bool: {should: []}}`,
/// which matches nothing.
pub fn fanout(content: &QueryContent, request: &SearchRequest) -> Clause {
    let word = content.word();
    let mut should = Vec::new();

    let match_fields = DEFAULT_FIELDS
        .into_iter()
        .chain(request.fields.iter().map(String::as_str));
    for field in match_fields.filter(|field| request.allows_field(field)) {
        should.push(Clause::matching(content.match_mode(), field, word));
    }

    for field in request
        .wildcard_fields
        .iter()
        .filter(|field| request.allows_field(field))
    {
        should.push(Clause::wildcard(field, format!("*{word}*")));
    }

    let parts: Vec<String> = request
        .part_fields()
        .into_iter()
        .filter(|field| request.allows_field(field))
        .collect();
    if !parts.is_empty() {
        should.push(Clause::query_string(parts, word));
    }

    BoolQuery::new().with_group(Occur::Should, should).into()
}
