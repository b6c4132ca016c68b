//! CDN viewer-request event shapes and the edge handler.
//!
//! The request is kept as the JSON object the CDN sent. Only `uri` and
//! `headers` are read from it, so a pass-through returns it field for field,
//! without any field the CDN never set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::edge::redirect_target;

pub const ACCEPT_LANGUAGE: &str = "accept-language";
pub const LOCATION: &str = "location";

/// The event a CDN hands to a viewer-request function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerRequestEvent {
    pub request: ViewerRequest,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `request` object of a viewer-request event, as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewerRequest {
    raw: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub value: String,
}

impl HeaderEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ViewerRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        let mut raw = Map::new();
        raw.insert("uri".to_string(), Value::String(uri.into()));
        Self { raw }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        let headers = self
            .raw
            .entry("headers")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(headers) = headers {
            headers.insert(name.to_ascii_lowercase(), json!({ "value": value }));
        }
        self
    }

    pub fn uri(&self) -> Option<&str> {
        self.raw.get("uri").and_then(Value::as_str)
    }

    /// Header value by name. An exact key wins; otherwise the first key that
    /// matches ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        let headers = self.raw.get("headers")?.as_object()?;
        let entry = headers.get(name).or_else(|| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, entry)| entry)
        })?;
        entry.get("value")?.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub status_code: u16,
    pub status_description: String,
    pub headers: BTreeMap<String, HeaderEntry>,
}

impl RedirectResponse {
    /// A `302 Found` pointing at `location`.
    pub fn found(location: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(LOCATION.to_string(), HeaderEntry::new(location));
        Self {
            status_code: 302,
            status_description: "Found".to_string(),
            headers,
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).map(|entry| entry.value.as_str())
    }
}

/// What the edge function hands back to the CDN.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EdgeOutcome {
    PassThrough(ViewerRequest),
    Redirect(RedirectResponse),
}

/// Viewer-request handler: redirect the bare root, pass everything else through.
pub fn handle_viewer_request(request: ViewerRequest) -> EdgeOutcome {
    let accept_language = request.header(ACCEPT_LANGUAGE);
    // A request without a string `uri` is never the bare root.
    let target = request
        .uri()
        .and_then(|uri| redirect_target(uri, accept_language));
    match target {
        Some(lang) => {
            debug!(
                accept_language = accept_language.unwrap_or(""),
                target = lang.code(),
                "Redirecting root request"
            );
            EdgeOutcome::Redirect(RedirectResponse::found(lang.root_path()))
        }
        None => EdgeOutcome::PassThrough(request),
    }
}

/// Parses a raw event, handles it, and serializes the outcome.
pub fn handle_event_json(raw: &str) -> Result<String, serde_json::Error> {
    let event: ViewerRequestEvent = serde_json::from_str(raw)?;
    serde_json::to_string(&handle_viewer_request(event.request))
}
