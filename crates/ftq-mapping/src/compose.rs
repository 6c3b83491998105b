//! Textual clause composition.

use ftq_query::QueryContent;

use crate::{
    dsl::{BoolQuery, Clause, Occur},
    fanout::fanout,
    request::SearchRequest,
};

/// Groups the fanout of every term by polarity into one boolean node.
///
/// Groups appear in the order their polarity is first seen. Polarities other
/// than the known three are carried through as their own group key.
pub fn compose(contents: &[QueryContent], request: &SearchRequest) -> Clause {
    let mut query = BoolQuery::new();
    for content in contents {
        query.push(Occur::from(content.polarity()), fanout(content, request));
    }
    query.into()
}
