//! Localhost rewriting for catalog addresses
//!
//! A single catalog file is expected to work both on the machine that hosts
//! the services and from elsewhere on the network. Addresses written as
//! `localhost` are therefore rewritten to the host the catalog was actually
//! fetched from; everything else in the address is left exactly as written.

use url::Url;

use crate::catalog::Catalog;

/// Rewrite the host component of `addr` from the literal `localhost` to
/// `host`, preserving scheme, port, path, and query byte-for-byte.
///
/// Addresses that do not parse as URLs, or whose host is anything other than
/// `localhost`, are returned unchanged (byte-identical).
pub fn rewrite_localhost(addr: &str, host: &str) -> String {
    let Ok(parsed) = Url::parse(addr) else {
        return addr.to_string();
    };
    if parsed.host_str() != Some("localhost") {
        return addr.to_string();
    }

    // Splice at the raw-string level rather than re-serializing the parsed
    // URL, which would normalize the address (e.g. append a trailing slash).
    match addr.find("localhost") {
        Some(idx) => {
            let mut out = String::with_capacity(addr.len() + host.len());
            out.push_str(&addr[..idx]);
            out.push_str(host);
            out.push_str(&addr[idx + "localhost".len()..]);
            out
        }
        None => addr.to_string(),
    }
}

/// Apply [`rewrite_localhost`] to every address in the catalog: each tab's
/// `main_url` and each service's `url` and `alt_url`.
pub fn rewrite_catalog_hosts(catalog: &mut Catalog, host: &str) {
    for tab in &mut catalog.tabs {
        if let Some(main_url) = &tab.main_url {
            tab.main_url = Some(rewrite_localhost(main_url, host));
        }
        for service in &mut tab.services {
            service.url = rewrite_localhost(&service.url, host);
            if let Some(alt) = &service.alt_url {
                service.alt_url = Some(rewrite_localhost(alt, host));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_with_port_is_rewritten() {
        assert_eq!(
            rewrite_localhost("http://localhost:8080", "example.org"),
            "http://example.org:8080"
        );
    }

    #[test]
    fn test_scheme_and_path_preserved() {
        assert_eq!(
            rewrite_localhost("https://localhost:32400/web/index.html", "nas.lan"),
            "https://nas.lan:32400/web/index.html"
        );
    }

    #[test]
    fn test_query_preserved() {
        assert_eq!(
            rewrite_localhost("http://localhost:3000/login?next=/admin", "box"),
            "http://box:3000/login?next=/admin"
        );
    }

    #[test]
    fn test_non_localhost_is_byte_identical() {
        let addr = "http://media.example.org:32400";
        assert_eq!(rewrite_localhost(addr, "other.host"), addr);
    }

    #[test]
    fn test_localhost_in_path_is_not_the_host() {
        let addr = "http://example.org/docs/localhost";
        assert_eq!(rewrite_localhost(addr, "other.host"), addr);
    }

    #[test]
    fn test_unparseable_address_is_untouched() {
        let addr = "not a url at all";
        assert_eq!(rewrite_localhost(addr, "example.org"), addr);
    }

    #[test]
    fn test_subdomain_of_localhost_is_untouched() {
        let addr = "http://api.localhost:9000";
        assert_eq!(rewrite_localhost(addr, "example.org"), addr);
    }

    #[test]
    fn test_catalog_rewrite_touches_all_address_fields() {
        let raw = r#"{
            "tabs": [{
                "name": "A", "key": "a",
                "mainUrl": "http://localhost:9090",
                "services": [
                    {
                        "name": "Plex",
                        "url": "http://localhost:32400",
                        "description": "media",
                        "alt_url": "http://localhost:32401"
                    },
                    {
                        "name": "Public",
                        "url": "https://public.example.org",
                        "description": "untouched"
                    }
                ]
            }]
        }"#;
        let mut catalog = Catalog::from_json(raw).unwrap();
        rewrite_catalog_hosts(&mut catalog, "hydra.lan");

        let tab = &catalog.tabs[0];
        assert_eq!(tab.main_url.as_deref(), Some("http://hydra.lan:9090"));
        assert_eq!(tab.services[0].url, "http://hydra.lan:32400");
        assert_eq!(
            tab.services[0].alt_url.as_deref(),
            Some("http://hydra.lan:32401")
        );
        assert_eq!(tab.services[1].url, "https://public.example.org");
        assert_eq!(tab.services[1].alt_url, None);
    }
}
