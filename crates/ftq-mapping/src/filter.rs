//! Filter clauses.
//!
//! Every builder returns entries for the outer `filter` list. Entries are ANDed
//! together; the clauses inside a `should` entry are alternatives.

use crate::{
    access::access_clauses,
    dsl::{BoolQuery, Clause, Occur},
    legacy,
    request::{AccessContext, FilterGroup, SearchRequest},
};

/// Restricts results to one provider.
pub fn provider_filter(provider_id: &str) -> Clause {
    bool_entry(Occur::Must, vec![Clause::term("provider", provider_id)])
}

/// Restricts results to documents the viewer may see.
pub fn access_filter(access: &AccessContext) -> Clause {
    bool_entry(Occur::Should, access_clauses(access))
}

/// Builds a tag filter: one term clause per tag on `field`, placed in `occur`.
///
/// With no tags the group is present but empty.
pub fn tag_filter(occur: Occur, field: &str, tags: &[String]) -> Clause {
    bool_entry(
        occur,
        tags.iter().map(|tag| Clause::term(field, tag)).collect(),
    )
}

/// Builds one `should` entry per wildcard filter group, empty groups included.
pub fn wildcard_filters(groups: &[FilterGroup]) -> Vec<Clause> {
    groups
        .iter()
        .map(|group| {
            bool_entry(
                Occur::Should,
                group
                    .iter()
                    .map(|entry| Clause::wildcard(&entry.field, &entry.pattern))
                    .collect(),
            )
        })
        .collect()
}

/// Builds the entries for regex filter groups.
///
/// Per group, each legacy payload entry becomes a `must` entry of its decoded
/// clauses, and the plain entries become one `should` entry of `regexp` clauses.
/// A group with no plain entries adds no `should` entry.
pub fn regex_filters(groups: &[FilterGroup]) -> Vec<Clause> {
    let mut entries = Vec::new();
    for group in groups {
        let mut regex = Vec::new();
        for entry in group {
            if entry.is_legacy_info() {
                entries.push(bool_entry(
                    Occur::Must,
                    legacy::bypass_clauses(&entry.pattern),
                ));
            } else {
                regex.push(Clause::regexp(&entry.field, &entry.pattern));
            }
        }

        if !regex.is_empty() {
            entries.push(bool_entry(Occur::Should, regex));
        }
    }
    entries
}

/// Builds the full filter list in order: provider, access, meta-tags, sub-tags,
/// wildcard groups, regex groups.
pub fn filter_entries(
    request: &SearchRequest,
    access: &AccessContext,
    provider_id: &str,
) -> Vec<Clause> {
    let mut entries = vec![
        provider_filter(provider_id),
        access_filter(access),
        tag_filter(Occur::Should, "metatags", &request.meta_tags),
        tag_filter(Occur::Must, "subtags", &request.sub_tags),
    ];
    entries.extend(wildcard_filters(&request.wildcard_filters));
    entries.extend(regex_filters(&request.regex_filters));
    entries
}

/// Wraps clauses as `{bool: {<occur>: [...]}}`.
fn bool_entry(occur: Occur, clauses: Vec<Clause>) -> Clause {
    BoolQuery::new().with_group(occur, clauses).into()
}
