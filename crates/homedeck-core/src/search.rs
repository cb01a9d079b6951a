//! Substring search across the catalog
//!
//! Search flattens the catalog into a single filtered list of services.
//! There is no index and no memoization: results are a pure function of
//! `(catalog, query)`, recomputed on every query or catalog change, so a
//! reload can never leave stale hits behind.

use crate::catalog::{Catalog, Service};

/// One search result: a service plus the tab it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub tab_key: &'a str,
    pub tab_name: &'a str,
    pub service: &'a Service,
}

/// Case-insensitive substring search over service name, description, url,
/// and alternate url.
///
/// An empty or whitespace-only query yields no hits (search mode is
/// inactive). Matching is OR across fields. Order is stable: tabs in
/// document order, services in document order within each tab.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut hits = Vec::new();
    for tab in &catalog.tabs {
        for service in &tab.services {
            if service_matches(service, &needle) {
                hits.push(SearchHit {
                    tab_key: &tab.key,
                    tab_name: &tab.name,
                    service,
                });
            }
        }
    }
    hits
}

/// `needle` must already be lowercased.
fn service_matches(service: &Service, needle: &str) -> bool {
    contains_ci(&service.name, needle)
        || contains_ci(&service.description, needle)
        || contains_ci(&service.url, needle)
        || service
            .alt_url
            .as_deref()
            .is_some_and(|alt| contains_ci(alt, needle))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tab;

    fn service(name: &str, url: &str, description: &str) -> Service {
        Service {
            name: name.to_string(),
            url: url.to_string(),
            description: description.to_string(),
            icon: None,
            alt_url: None,
        }
    }

    fn two_tab_catalog() -> Catalog {
        Catalog {
            tabs: vec![
                Tab {
                    name: "Alpha".to_string(),
                    key: "a".to_string(),
                    id: 1,
                    main_url: None,
                    icon: Default::default(),
                    tooltip: Default::default(),
                    services: vec![service("Plex", "http://x:32400", "stream")],
                },
                Tab {
                    name: "Beta".to_string(),
                    key: "b".to_string(),
                    id: 2,
                    main_url: None,
                    icon: Default::default(),
                    tooltip: Default::default(),
                    services: vec![service("Gitea", "http://y:3000", "git")],
                },
            ],
        }
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let catalog = two_tab_catalog();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "   ").is_empty());
        assert!(search(&catalog, "\t\n").is_empty());
    }

    #[test]
    fn test_match_by_name_case_insensitive() {
        let catalog = two_tab_catalog();
        let hits = search(&catalog, "PLEX");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].service.name, "Plex");
        assert_eq!(hits[0].tab_key, "a");
        assert_eq!(hits[0].tab_name, "Alpha");
    }

    #[test]
    fn test_git_query_hits_exactly_gitea_on_tab_b() {
        let catalog = two_tab_catalog();
        let hits = search(&catalog, "git");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tab_key, "b");
        assert_eq!(hits[0].service.name, "Gitea");
    }

    #[test]
    fn test_match_by_url() {
        let catalog = two_tab_catalog();
        let hits = search(&catalog, "32400");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].service.name, "Plex");
    }

    #[test]
    fn test_match_by_alt_url() {
        let mut catalog = two_tab_catalog();
        catalog.tabs[0].services[0].alt_url = Some("https://plex.example.org".to_string());
        let hits = search(&catalog, "example.org");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].service.name, "Plex");
    }

    #[test]
    fn test_absent_alt_url_never_matches_nor_panics() {
        let catalog = two_tab_catalog();
        // "none" appears in no populated field.
        assert!(search(&catalog, "none").is_empty());
    }

    #[test]
    fn test_or_across_fields_no_duplicates() {
        // Service matching on both name and description must appear once.
        let mut catalog = two_tab_catalog();
        catalog.tabs[0].services[0].description = "plex media".to_string();
        let hits = search(&catalog, "plex");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_result_order_follows_document_order() {
        let mut catalog = two_tab_catalog();
        catalog.tabs[0]
            .services
            .push(service("Gitweb", "http://x:1234", "mirror"));
        // Both tabs now contain a "git" match; tab "a"'s second service and
        // tab "b"'s first, in that order.
        let hits = search(&catalog, "git");
        let names: Vec<_> = hits.iter().map(|h| h.service.name.as_str()).collect();
        assert_eq!(names, vec!["Gitweb", "Gitea"]);
    }

    #[test]
    fn test_search_is_deterministic() {
        let catalog = two_tab_catalog();
        let first = search(&catalog, "http");
        let second = search(&catalog, "http");
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_whitespace_around_query_is_trimmed() {
        let catalog = two_tab_catalog();
        let hits = search(&catalog, "  gitea  ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].service.name, "Gitea");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(search(&catalog, "anything").is_empty());
    }
}
