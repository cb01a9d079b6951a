//! Catalog loading
//!
//! Fetches the catalog resource (HTTP URL or local file), parses and
//! validates it, and rewrites `localhost` addresses to the host the
//! document was fetched from. Each fetch defeats intermediate caches with a
//! fresh query token, so edits to the document are always picked up.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use homedeck_core::prelude::*;
use homedeck_core::{rewrite_catalog_hosts, Catalog};

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Remote document fetched over HTTP(S).
    Remote(Url),
    /// Local file read from disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a settings/CLI string: anything that parses as an
    /// `http(s)` URL is remote, everything else is a filesystem path.
    pub fn parse(raw: &str) -> CatalogSource {
        if let Ok(url) = Url::parse(raw) {
            if matches!(url.scheme(), "http" | "https") {
                return CatalogSource::Remote(url);
            }
        }
        CatalogSource::File(PathBuf::from(raw))
    }

    /// Human-readable form for logs and the error view.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Remote(url) => url.to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }

    /// Host that `localhost` addresses should be rewritten to. Only remote
    /// sources have one: a file-backed catalog is being viewed on the
    /// machine that hosts it.
    fn remote_host(&self) -> Option<String> {
        match self {
            CatalogSource::Remote(url) => url.host_str().map(str::to_string),
            CatalogSource::File(_) => None,
        }
    }
}

/// Load, parse, and normalize the catalog.
///
/// Fetch and read failures surface as [`Error::CatalogLoad`]; documents
/// without a `tabs` array as [`Error::CatalogShape`]. Both leave the
/// previous in-memory catalog untouched; the caller swaps state only on
/// success.
pub async fn load(source: &CatalogSource, timeout: Duration) -> Result<Catalog> {
    let raw = match source {
        CatalogSource::Remote(url) => fetch_remote(url, timeout).await?,
        CatalogSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::catalog_load(format!("read {}: {e}", path.display())))?,
    };

    let mut catalog = Catalog::from_json(&raw)?;
    if let Some(host) = source.remote_host() {
        rewrite_catalog_hosts(&mut catalog, &host);
    }

    info!(
        "Loaded catalog from {} ({} tabs, {} services)",
        source.describe(),
        catalog.tabs.len(),
        catalog.service_count()
    );
    Ok(catalog)
}

async fn fetch_remote(url: &Url, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::catalog_load(format!("http client: {e}")))?;

    let busted = cache_busted(url);
    let response = client
        .get(busted)
        .send()
        .await
        .map_err(|e| Error::catalog_load(format!("fetch {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::catalog_load(format!(
            "fetch {url}: HTTP {}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| Error::catalog_load(format!("read body from {url}: {e}")))
}

/// Append a fresh `_=<unix-millis>` query token so no intermediate cache
/// can serve a stale document. Existing query parameters are preserved.
fn cache_busted(url: &Url) -> Url {
    let mut busted = url.clone();
    let token = chrono::Utc::now().timestamp_millis().to_string();
    busted.query_pairs_mut().append_pair("_", &token);
    busted
}
