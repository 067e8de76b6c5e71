//! Client-side free-text search over the resource list.
//!
//! A resource matches when the query, compared case-insensitively, is a substring of
//! its subject name, unit name or topic. The empty query matches everything. Extra
//! information and document paths are not searched.

use crate::model::resource::Resource;

/// A lowercased query, ready to be matched against many resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&resource.subject_name, &resource.unit_name, &resource.topic]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Returns `true` if `resource` should be listed for `query`.
pub fn matches(resource: &Resource, query: &str) -> bool {
    SearchQuery::new(query).matches(resource)
}

/// Keeps the resources matching `query`, in their original order.
pub fn filter<'a>(resources: &'a [Resource], query: &str) -> Vec<&'a Resource> {
    let query = SearchQuery::new(query);
    resources.iter().filter(|r| query.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resource(id: &str, subject: &str, unit: &str, topic: &str) -> Resource {
        Resource {
            id: id.to_string(),
            subject_name: subject.to_string(),
            unit_name: unit.to_string(),
            topic: topic.to_string(),
            extra_info: Some("shared notes".to_string()),
            document_path: None,
        }
    }

    fn catalog() -> Vec<Resource> {
        vec![
            resource("1", "Mathematics", "Algebra", "Quadratics"),
            resource("2", "Physics", "Mechanics", "Momentum"),
            resource("3", "Chemistry", "Organic", "Alkanes"),
            resource("4", "Computer Science", "Algorithms", "Sorting"),
        ]
    }

    fn ids(resources: &[&Resource]) -> Vec<String> {
        resources.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let all = catalog();
        assert_eq!(ids(&filter(&all, "")), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn matching_is_case_insensitive_across_the_three_fields() {
        let all = catalog();
        assert_eq!(ids(&filter(&all, "PHYS")), vec!["2"]);
        assert_eq!(ids(&filter(&all, "organic")), vec!["3"]);
        assert_eq!(ids(&filter(&all, "sOrT")), vec!["4"]);
        assert_eq!(ids(&filter(&all, "alg")), vec!["1", "4"]);
    }

    #[test]
    fn extra_info_is_not_searched() {
        let all = catalog();
        assert!(filter(&all, "shared").is_empty());
    }

    #[test]
    fn no_match_yields_empty_result() {
        let all = catalog();
        assert!(filter(&all, "biology").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn filter_agrees_with_field_by_field_definition() {
        let all = catalog();
        for query in ["", "a", "Al", "MECH", "ics", "zzz", " ", "Science"] {
            let expected: Vec<String> = all
                .iter()
                .filter(|r| {
                    let q = query.to_lowercase();
                    r.subject_name.to_lowercase().contains(&q)
                        || r.unit_name.to_lowercase().contains(&q)
                        || r.topic.to_lowercase().contains(&q)
                })
                .map(|r| r.id.clone())
                .collect();
            assert_eq!(ids(&filter(&all, query)), expected, "query {:?}", query);
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let all = catalog();
        for query in ["a", "alg", "MOM", ""] {
            let once: Vec<Resource> = filter(&all, query).into_iter().cloned().collect();
            let twice: Vec<Resource> = filter(&once, query).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn search_query_reports_emptiness() {
        assert!(SearchQuery::new("").is_empty());
        assert!(!SearchQuery::new("x").is_empty());
        assert!(matches(&catalog()[0], "QUAD"));
    }
}
