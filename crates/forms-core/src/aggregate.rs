//! Grouping stored responses into per-version result sets.
//!
//! Storage hands over versions ordered by version token and responses ordered
//! by version token and then insertion. Grouping walks both lists once with a
//! cursor over the versions: a response whose token differs from the cursor's
//! moves the cursor forward until the tokens match, so versions without
//! responses simply come out empty.

use crate::entities::{FormVersion, Response, ResponseSet};

/// Result of [`group_responses`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped {
    pub sets: Vec<ResponseSet>,
    /// Responses with no version row at or after the cursor. Non-empty only
    /// if the inputs broke the ordering contract or a version row is missing.
    pub unmatched: Vec<Response>,
}

/// Group `responses` under their owning version, preserving input order.
///
/// Returns one set per version, in version order; no versions yields no sets.
#[must_use]
pub fn group_responses(versions: Vec<FormVersion>, responses: Vec<Response>) -> Grouped {
    let mut sets: Vec<ResponseSet> = versions
        .into_iter()
        .map(|v| ResponseSet {
            version: v.version,
            title: v.title,
            labels: v.labels,
            responses: Vec::new(),
        })
        .collect();
    let mut unmatched = Vec::new();
    let mut cursor = 0;

    for response in responses {
        while cursor < sets.len() && sets[cursor].version != response.version {
            cursor += 1;
        }
        match sets.get_mut(cursor) {
            Some(set) => set.responses.push(response),
            None => unmatched.push(response),
        }
    }

    Grouped { sets, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn version(token: &str) -> FormVersion {
        FormVersion {
            form_id: 1,
            version: token.to_string(),
            title: format!("title {token}"),
            labels: vec!["Name".into()],
        }
    }

    fn response(id: i64, token: &str) -> Response {
        Response {
            id,
            form_id: 1,
            version: token.to_string(),
            values: vec![format!("r{id}")],
            created_at: Utc::now(),
        }
    }

    fn ids(set: &ResponseSet) -> Vec<i64> {
        set.responses.iter().map(|r| r.id).collect()
    }

    #[test]
    fn no_versions_no_sets() {
        let grouped = group_responses(Vec::new(), Vec::new());
        assert!(grouped.sets.is_empty());
        assert!(grouped.unmatched.is_empty());
    }

    #[test]
    fn groups_in_order() {
        let grouped = group_responses(
            vec![version("a"), version("b")],
            vec![response(1, "a"), response(2, "a"), response(3, "b")],
        );
        assert_eq!(grouped.sets.len(), 2);
        assert_eq!(ids(&grouped.sets[0]), vec![1, 2]);
        assert_eq!(ids(&grouped.sets[1]), vec![3]);
        assert_eq!(grouped.sets[1].title, "title b");
        assert_eq!(grouped.sets[0].labels, vec!["Name"]);
    }

    #[test]
    fn version_without_responses_is_empty() {
        let grouped = group_responses(
            vec![version("a"), version("b"), version("c")],
            vec![response(1, "a"), response(2, "c")],
        );
        assert_eq!(ids(&grouped.sets[0]), vec![1]);
        assert!(grouped.sets[1].responses.is_empty());
        assert_eq!(ids(&grouped.sets[2]), vec![2]);
        assert!(grouped.unmatched.is_empty());
    }

    #[test]
    fn versions_without_any_responses_still_listed() {
        let grouped = group_responses(vec![version("a")], Vec::new());
        assert_eq!(grouped.sets.len(), 1);
        assert!(grouped.sets[0].responses.is_empty());
    }

    #[test]
    fn responses_without_version_are_reported() {
        let grouped = group_responses(
            vec![version("b")],
            vec![response(1, "b"), response(2, "z")],
        );
        assert_eq!(ids(&grouped.sets[0]), vec![1]);
        assert_eq!(grouped.unmatched.len(), 1);
        assert_eq!(grouped.unmatched[0].id, 2);
    }
}
