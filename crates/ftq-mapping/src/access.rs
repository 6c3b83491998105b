//! Access-control clauses.

use crate::{dsl::Clause, request::AccessContext};

/// Value of the `users` field on documents shared with everyone.
pub const EVERYONE: &str = "__all";

/// Builds the clauses of which any grants the viewer access to a document.
///
/// Order is fixed: owner, direct share, public share, then one clause per group
/// and one per circle.
pub fn access_clauses(access: &AccessContext) -> Vec<Clause> {
    let mut clauses = Vec::with_capacity(3 + access.groups.len() + access.circles.len());
    clauses.push(Clause::term("owner", &access.viewer));
    clauses.push(Clause::term("users", &access.viewer));
    clauses.push(Clause::term("users", EVERYONE));
    clauses.extend(access.groups.iter().map(|group| Clause::term("groups", group)));
    clauses.extend(
        access
            .circles
            .iter()
            .map(|circle| Clause::term("circles", circle)),
    );
    clauses
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn viewer_without_memberships() {
        let clauses = access_clauses(&AccessContext::new("alice"));
        assert_eq!(
            serde_json::to_value(&clauses).unwrap(),
            json!([
                {"term": {"owner": "alice"}},
                {"term": {"users": "alice"}},
                {"term": {"users": "__all"}},
            ])
        );
    }

    #[test]
    fn cardinality_and_order() {
        let access = AccessContext {
            viewer: "bob".into(),
            groups: vec!["admin".into(), "staff".into()],
            circles: vec!["book-club".into()],
        };
        let clauses = access_clauses(&access);

        assert_eq!(clauses.len(), 3 + 2 + 1);
        assert_eq!(clauses[3], Clause::term("groups", "admin"));
        assert_eq!(clauses[4], Clause::term("groups", "staff"));
        assert_eq!(clauses[5], Clause::term("circles", "book-club"));
    }
}
