//! HTTP API Client
//!
//! Base-URL configuration and the single-GET collection fetch used by every
//! page. Endpoints return either a plain JSON array or a paginated envelope
//! of the shape `{"results": [...]}`.

use gloo_net::http::Request;
use serde_json::Value;

use crate::api::error::FetchError;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Local-storage key for an explicit base-URL override
const API_URL_STORAGE_KEY: &str = "octofit_api_url";

/// Port the backend is forwarded on in Codespaces deployments
const BACKEND_PORT: &str = "8000";

/// Resolve the API base URL: explicit local-storage override (key
/// `octofit_api_url`, settable from the browser console), else a URL derived
/// from the window's hostname, else the localhost default.
pub fn get_api_base() -> String {
    let url = stored_api_base()
        .or_else(window_derived_api_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(API_URL_STORAGE_KEY).ok()?
}

fn window_derived_api_base() -> Option<String> {
    let hostname = web_sys::window()?.location().hostname().ok()?;
    derive_api_base(&hostname)
}

/// Rewrite a Codespaces-style forwarded hostname (`{name}-{port}.app.github.dev`)
/// to the backend's forwarded URL on port 8000. Any other hostname yields
/// `None` and the caller falls back to the default.
pub fn derive_api_base(hostname: &str) -> Option<String> {
    let forwarded = hostname.strip_suffix(".app.github.dev")?;
    let (codespace, port) = forwarded.rsplit_once('-')?;
    if codespace.is_empty() || port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "https://{codespace}-{BACKEND_PORT}.app.github.dev/api"
    ))
}

/// Fetch one collection endpoint.
///
/// Exactly one outbound GET per call; the view layer decides when a new
/// activation warrants a new fetch. No retries, no timeout beyond the
/// transport default.
pub async fn fetch_collection(endpoint: &str) -> Result<Vec<Value>, FetchError> {
    let url = format!("{}/{}/", get_api_base(), endpoint);
    web_sys::console::log_1(&format!("Fetching from: {url}").into());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(unwrap_collection(body))
}

/// Handle both paginated (`{"results": [...]}`) and plain array responses.
///
/// A body that is not an array either way yields an empty collection, never
/// an error: a bare object without `results`, a non-array `results` field,
/// and scalar bodies all count as "no records".
pub fn unwrap_collection(body: Value) -> Vec<Value> {
    match body {
        Value::Array(records) => records,
        Value::Object(mut fields) => match fields.remove("results") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_array_passes_through_verbatim() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let records = unwrap_collection(body);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], json!({"id": 1}));
        assert_eq!(records[2], json!({"id": 3}));
    }

    #[test]
    fn envelope_yields_its_results_field() {
        let body = json!({"count": 2, "next": null, "results": [{"id": 7}, {"id": 8}]});
        let records = unwrap_collection(body);
        assert_eq!(records, vec![json!({"id": 7}), json!({"id": 8})]);
    }

    #[test]
    fn empty_envelope_yields_empty_collection() {
        assert!(unwrap_collection(json!({"results": []})).is_empty());
    }

    #[test]
    fn non_array_bodies_yield_empty_collection() {
        assert!(unwrap_collection(json!({"detail": "not found"})).is_empty());
        assert!(unwrap_collection(json!({"results": "oops"})).is_empty());
        assert!(unwrap_collection(json!("plain string")).is_empty());
        assert!(unwrap_collection(json!(42)).is_empty());
        assert!(unwrap_collection(Value::Null).is_empty());
    }

    #[test]
    fn codespace_hostname_is_rewritten_to_backend_port() {
        assert_eq!(
            derive_api_base("fuzzy-spork-abc-3000.app.github.dev").as_deref(),
            Some("https://fuzzy-spork-abc-8000.app.github.dev/api")
        );
    }

    #[test]
    fn other_hostnames_are_not_derived() {
        assert_eq!(derive_api_base("localhost"), None);
        assert_eq!(derive_api_base("example.com"), None);
        // No port segment to rewrite
        assert_eq!(derive_api_base("nodash.app.github.dev"), None);
    }
}
